//! Repository ports used by the service layer.

pub mod decks;

pub use decks::{Deck, DeckRepo, DeckUpdate};

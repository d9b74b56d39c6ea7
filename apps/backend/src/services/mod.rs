pub mod decks;

pub use decks::{CreateDeck, DeckService};

pub mod decks;

pub use decks::{CreatedDeck, DrawnCards, OpenDeck};

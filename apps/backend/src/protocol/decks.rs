use serde::{Deserialize, Serialize};

use crate::domain::CardView;

/// Summary returned when a deck is created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedDeck {
    pub deck_id: String,
    pub shuffled: bool,
    pub remaining: usize,
}

/// Full view of a deck with every remaining card expanded, top first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenDeck {
    pub deck_id: String,
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<CardView>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawnCards {
    pub cards: Vec<CardView>,
}

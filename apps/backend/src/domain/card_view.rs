//! Display projection of a stored card code.

use serde::{Deserialize, Serialize};

use super::cards_types::Card;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub value: String,
    pub suit: String,
    pub code: String,
}

impl CardView {
    /// Expand a stored code into its display names.
    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        let card = code.parse::<Card>()?;
        Ok(Self {
            value: card.rank.name().to_string(),
            suit: card.suit.name().to_string(),
            code: code.to_string(),
        })
    }
}

impl From<Card> for CardView {
    fn from(card: Card) -> Self {
        Self {
            value: card.rank.name().to_string(),
            suit: card.suit.name().to_string(),
            code: card.code(),
        }
    }
}

//! Card parsing from code strings (e.g., "AS", "10d").
//!
//! Parsing is case-insensitive; the last character is the suit and
//! everything before it the rank.

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit, RANKS, SUITS};
use crate::errors::domain::{DomainError, ValidationKind};

fn invalid(code: &str) -> DomainError {
    DomainError::validation(
        ValidationKind::InvalidCardCode,
        format!("invalid card code: {code}"),
    )
}

impl FromStr for Rank {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RANKS
            .into_iter()
            .find(|rank| rank.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| invalid(s))
    }
}

impl FromStr for Suit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SUITS
            .into_iter()
            .find(|suit| suit.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| invalid(s))
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !(2..=3).contains(&s.len()) || !s.is_ascii() {
            return Err(invalid(s));
        }
        let (rank, suit) = s.split_at(s.len() - 1);
        let rank = rank.parse::<Rank>().map_err(|_| invalid(s))?;
        let suit = suit.parse::<Suit>().map_err(|_| invalid(s))?;
        Ok(Card { rank, suit })
    }
}

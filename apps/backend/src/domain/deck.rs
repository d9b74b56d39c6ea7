//! Default deck generation and draw bounds.

use super::cards_types::{Card, RANKS, SUITS};
use crate::errors::domain::{DomainError, ValidationKind};

/// Cards in a full deck; also the hard cap on a single draw.
pub const FULL_DECK_SIZE: usize = 52;

pub const COUNT_OUT_OF_RANGE: &str = "count must be between 1 - 52";
pub const COUNT_EXCEEDS_REMAINING: &str = "count must be less or equal than deck's remaining";

/// The 52 cards in canonical order: suits S, D, C, H, and within each suit
/// ranks A, 2..10, J, Q, K.
pub fn default_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(FULL_DECK_SIZE);
    for suit in SUITS {
        for rank in RANKS {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

pub fn default_codes() -> Vec<String> {
    default_deck().iter().map(Card::code).collect()
}

/// Static guard on a draw request, checked before any storage access.
pub fn check_draw_count(count: i64) -> Result<usize, DomainError> {
    match usize::try_from(count) {
        Ok(n) if (1..=FULL_DECK_SIZE).contains(&n) => Ok(n),
        _ => Err(DomainError::validation(
            ValidationKind::CountOutOfRange,
            COUNT_OUT_OF_RANGE,
        )),
    }
}

/// Split `cards` into the drawn prefix and the remainder.
pub fn draw_from_top<T>(cards: &[T], count: usize) -> Result<(&[T], &[T]), DomainError> {
    if count > cards.len() {
        return Err(DomainError::validation(
            ValidationKind::CountExceedsRemaining,
            COUNT_EXCEEDS_REMAINING,
        ));
    }
    Ok(cards.split_at(count))
}

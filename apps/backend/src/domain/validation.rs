//! Card list validation for custom decks.

use std::collections::HashSet;

use super::cards_types::Card;
use crate::errors::domain::{DomainError, ValidationKind};

pub const INVALID_CARD_CODE: &str = "contains invalid card code";
pub const DUPLICATE_CARD_CODE: &str = "contains duplicate";

/// Split a comma-separated card list. Tokens are kept exactly as given,
/// whitespace included; validation decides what is acceptable.
pub fn split_card_list(list: &str) -> Vec<String> {
    list.split(',').map(str::to_string).collect()
}

/// Parse and validate a list of card codes in one pass.
///
/// Each code must be `<rank><suit>` (case-insensitive) and appear once.
/// A code is checked for format before duplication, so the first
/// offending code decides which error is reported.
pub fn parse_card_codes<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Card>, DomainError> {
    let mut seen = HashSet::with_capacity(codes.len());
    let mut cards = Vec::with_capacity(codes.len());

    for code in codes {
        let card = code
            .as_ref()
            .parse::<Card>()
            .map_err(|_| DomainError::validation(ValidationKind::InvalidCardCode, INVALID_CARD_CODE))?;
        if !seen.insert(card) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateCardCode,
                DUPLICATE_CARD_CODE,
            ));
        }
        cards.push(card);
    }

    Ok(cards)
}

/// Check a list of card codes without keeping the parsed cards.
pub fn validate_cards<S: AsRef<str>>(codes: &[S]) -> Result<(), DomainError> {
    parse_card_codes(codes).map(|_| ())
}

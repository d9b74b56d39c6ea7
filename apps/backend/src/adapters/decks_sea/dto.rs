//! Row <-> domain conversions for the decks table.

use sea_orm::Set;
use serde_json::Value as JsonValue;

use crate::entities::decks;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::decks::Deck;

fn corrupt(id: &str, what: impl std::fmt::Display) -> DomainError {
    DomainError::infra(
        InfraErrorKind::DataCorruption,
        format!("stored deck {id} is corrupt: {what}"),
    )
}

/// Narrow a card count to the column type. Counts never exceed a full deck.
pub fn remaining_to_db(id: &str, remaining: usize) -> Result<i32, DomainError> {
    i32::try_from(remaining).map_err(|_| corrupt(id, format!("remaining {remaining} out of range")))
}

pub fn cards_to_json(cards: &[String]) -> JsonValue {
    JsonValue::Array(cards.iter().cloned().map(JsonValue::String).collect())
}

/// Insert model for a freshly created deck.
pub fn active_model_for(deck: &Deck) -> Result<decks::ActiveModel, DomainError> {
    Ok(decks::ActiveModel {
        id: Set(deck.id.clone()),
        shuffled: Set(deck.shuffled),
        remaining: Set(remaining_to_db(&deck.id, deck.remaining)?),
        cards: Set(cards_to_json(&deck.cards)),
        created_at: Set(deck.created_at),
        updated_at: Set(deck.updated_at),
    })
}

/// Decode a stored row. A malformed card list or a `remaining` that
/// disagrees with it is reported as data corruption.
pub fn deck_from_model(model: decks::Model) -> Result<Deck, DomainError> {
    let cards: Vec<String> = serde_json::from_value(model.cards)
        .map_err(|e| corrupt(&model.id, format!("cards column: {e}")))?;

    let remaining = usize::try_from(model.remaining)
        .map_err(|_| corrupt(&model.id, format!("negative remaining {}", model.remaining)))?;
    if remaining != cards.len() {
        return Err(corrupt(
            &model.id,
            format!("remaining {remaining} but {} cards stored", cards.len()),
        ));
    }

    Ok(Deck {
        id: model.id,
        shuffled: model.shuffled,
        remaining,
        cards,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

//! Deck persistence port.
//!
//! The service layer only sees [`DeckRepo`]; SeaORM and in-memory
//! implementations live under `crate::adapters`.

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::errors::domain::DomainError;

/// Deck domain model as stored.
///
/// `remaining` always equals `cards.len()`; index 0 of `cards` is the top
/// of the deck.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    pub id: String,
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Deck {
    /// New deck stamped with the same created/updated time.
    pub fn new(id: impl Into<String>, shuffled: bool, cards: Vec<String>) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: id.into(),
            shuffled,
            remaining: cards.len(),
            cards,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Full overwrite of a deck's mutable fields.
///
/// The write only applies while the stored `remaining` still equals
/// `expected_remaining`; otherwise the repo reports an optimistic-lock
/// conflict (or not-found if the deck is gone).
#[derive(Debug, Clone, PartialEq)]
pub struct DeckUpdate {
    pub id: String,
    pub shuffled: bool,
    pub remaining: usize,
    pub cards: Vec<String>,
    pub expected_remaining: usize,
}

impl DeckUpdate {
    /// Update that replaces `deck`'s cards with `rest`.
    pub fn remainder_of(deck: &Deck, rest: &[String]) -> Self {
        Self {
            id: deck.id.clone(),
            shuffled: deck.shuffled,
            remaining: rest.len(),
            cards: rest.to_vec(),
            expected_remaining: deck.remaining,
        }
    }
}

#[async_trait]
pub trait DeckRepo: Send + Sync {
    /// Insert a new deck; the caller guarantees id uniqueness.
    async fn create(&self, deck: &Deck) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Deck>, DomainError>;

    async fn update(&self, update: &DeckUpdate) -> Result<(), DomainError>;

    /// Cheap liveness probe for health checks.
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }

    /// Short backend label for logs and health output.
    fn backend_name(&self) -> &'static str;
}

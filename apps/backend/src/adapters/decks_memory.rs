//! Process-local deck store. Nothing survives a restart.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use time::OffsetDateTime;

use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind};
use crate::repos::decks::{Deck, DeckRepo, DeckUpdate};

#[derive(Debug, Default)]
pub struct InMemoryDeckRepo {
    decks: RwLock<HashMap<String, Deck>>,
}

impl InMemoryDeckRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.decks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.decks.read().is_empty()
    }
}

#[async_trait]
impl DeckRepo for InMemoryDeckRepo {
    async fn create(&self, deck: &Deck) -> Result<(), DomainError> {
        let mut decks = self.decks.write();
        if decks.contains_key(&deck.id) {
            return Err(DomainError::conflict(
                ConflictKind::DuplicateDeckId,
                "deck id already exists",
            ));
        }
        decks.insert(deck.id.clone(), deck.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Deck>, DomainError> {
        Ok(self.decks.read().get(id).cloned())
    }

    async fn update(&self, update: &DeckUpdate) -> Result<(), DomainError> {
        let mut decks = self.decks.write();
        let Some(stored) = decks.get_mut(&update.id) else {
            return Err(DomainError::not_found(
                NotFoundKind::Deck,
                format!("deck with id {} wasn't found", update.id),
            ));
        };
        if stored.remaining != update.expected_remaining {
            return Err(DomainError::conflict(
                ConflictKind::OptimisticLock,
                format!(
                    "deck {} was modified concurrently (expected {} remaining, found {}); retry the draw",
                    update.id, update.expected_remaining, stored.remaining
                ),
            ));
        }
        stored.shuffled = update.shuffled;
        stored.remaining = update.remaining;
        stored.cards = update.cards.clone();
        stored.updated_at = OffsetDateTime::now_utc();
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

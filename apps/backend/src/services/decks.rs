//! Deck domain service: create, open and draw.

use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::deck::{check_draw_count, draw_from_top};
use crate::domain::{default_codes, parse_card_codes, split_card_list, Card, CardView, DeckRng};
use crate::errors::domain::{DomainError, ErrorKind, InfraErrorKind, NotFoundKind};
use crate::protocol::{CreatedDeck, OpenDeck};
use crate::repos::decks::{Deck, DeckRepo, DeckUpdate};

/// Input for [`DeckService::create_deck`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateDeck {
    pub shuffled: bool,
    /// Comma-separated card codes; absent or empty means a full deck.
    pub cards: Option<String>,
}

pub struct DeckService {
    repo: Arc<dyn DeckRepo>,
    rng: DeckRng,
}

impl DeckService {
    pub fn new(repo: Arc<dyn DeckRepo>, rng: DeckRng) -> Self {
        Self { repo, rng }
    }

    pub fn repo(&self) -> &Arc<dyn DeckRepo> {
        &self.repo
    }

    pub async fn create_deck(&self, req: CreateDeck) -> Result<CreatedDeck, DomainError> {
        let mut codes = match req.cards.as_deref() {
            None | Some("") => default_codes(),
            Some(list) => {
                let tokens = split_card_list(list);
                parse_card_codes(&tokens)?
                    .iter()
                    .map(Card::code)
                    .collect()
            }
        };

        if req.shuffled {
            self.rng.shuffle(&mut codes);
        }

        let deck = Deck::new(Uuid::new_v4().to_string(), req.shuffled, codes);
        self.repo.create(&deck).await.map_err(|e| {
            error!(deck_id = %deck.id, error = %e, "failed to save deck");
            match e.kind() {
                ErrorKind::Server => e.context("couldn't save deck"),
                // store-side rejections of a fresh deck are server faults
                _ => DomainError::wrap(
                    InfraErrorKind::Other("DeckInsert".into()),
                    "couldn't save deck",
                    e,
                ),
            }
        })?;

        info!(
            deck_id = %deck.id,
            shuffled = deck.shuffled,
            remaining = deck.remaining,
            "deck created"
        );
        Ok(CreatedDeck {
            deck_id: deck.id,
            shuffled: deck.shuffled,
            remaining: deck.remaining,
        })
    }

    pub async fn get_deck_by_id(&self, id: &str) -> Result<OpenDeck, DomainError> {
        let deck = self.load(id).await?;
        let cards = expand(&deck.id, &deck.cards)?;
        Ok(OpenDeck {
            deck_id: deck.id,
            shuffled: deck.shuffled,
            remaining: deck.remaining,
            cards,
        })
    }

    /// Take `count` cards off the top and persist the remainder.
    ///
    /// The cards are only returned once the remainder is stored; a write that
    /// loses a race with another draw fails with an optimistic-lock conflict.
    pub async fn draw_cards(&self, id: &str, count: i64) -> Result<Vec<CardView>, DomainError> {
        let count = check_draw_count(count)?;

        let deck = self.load(id).await?;
        // corrupt rows fail the draw the same way they fail a read
        expand(&deck.id, &deck.cards)?;

        let (drawn, rest) = draw_from_top(&deck.cards, count).inspect_err(|_| {
            warn!(deck_id = %deck.id, count, remaining = deck.remaining, "draw exceeds remaining");
        })?;
        let drawn = expand(&deck.id, drawn)?;

        let update = DeckUpdate::remainder_of(&deck, rest);
        self.repo.update(&update).await.map_err(|e| {
            match e.kind() {
                ErrorKind::Server => error!(deck_id = %deck.id, error = %e, "failed to update deck"),
                _ => warn!(deck_id = %deck.id, error = %e, "draw rejected by store"),
            }
            e.context("couldn't update deck")
        })?;

        info!(
            deck_id = %deck.id,
            drawn = drawn.len(),
            remaining = update.remaining,
            "cards drawn"
        );
        Ok(drawn)
    }

    async fn load(&self, id: &str) -> Result<Deck, DomainError> {
        let found = self.repo.find_by_id(id).await.map_err(|e| {
            error!(deck_id = %id, error = %e, "failed to fetch deck");
            e.context("couldn't get deck from the database")
        })?;
        found.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Deck, format!("deck with id {id} wasn't found"))
        })
    }
}

/// Expand stored codes into views. Stored codes were validated on the way
/// in, so a failure here means the row is corrupt.
fn expand(deck_id: &str, codes: &[String]) -> Result<Vec<CardView>, DomainError> {
    codes
        .iter()
        .map(|code| {
            CardView::from_code(code).map_err(|e| {
                error!(deck_id = %deck_id, code = %code, "stored deck holds an invalid card code");
                DomainError::wrap(
                    InfraErrorKind::DataCorruption,
                    format!("deck {deck_id} holds an invalid card code"),
                    e,
                )
            })
        })
        .collect()
}

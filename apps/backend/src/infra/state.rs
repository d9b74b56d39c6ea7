use std::sync::Arc;

use tracing::info;

use crate::adapters::{DeckRepoSea, InMemoryDeckRepo};
use crate::config::db::StoreKind;
use crate::domain::DeckRng;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::repos::DeckRepo;
use crate::services::decks::DeckService;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    store: StoreKind,
    repo: Option<Arc<dyn DeckRepo>>,
    shuffle_seed: Option<u64>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            store: StoreKind::Memory,
            repo: None,
            shuffle_seed: None,
        }
    }

    pub fn with_store(mut self, store: StoreKind) -> Self {
        self.store = store;
        self
    }

    /// Use a ready-made repository instead of building one for the store.
    pub fn with_repo(mut self, repo: Arc<dyn DeckRepo>) -> Self {
        self.repo = Some(repo);
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.shuffle_seed = seed;
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let rng = DeckRng::new(self.shuffle_seed);

        if let Some(repo) = self.repo {
            return Ok(AppState::new(None, self.store, DeckService::new(repo, rng)));
        }

        let (db, repo): (_, Arc<dyn DeckRepo>) = if self.store.is_sql() {
            // single entrypoint: connect + migrate
            let conn = bootstrap_db(self.store).await?;
            (Some(conn.clone()), Arc::new(DeckRepoSea::new(conn)))
        } else {
            (None, Arc::new(InMemoryDeckRepo::new()))
        };

        info!(store = %self.store, seeded = self.shuffle_seed.is_some(), "state=ready");
        Ok(AppState::new(db, self.store, DeckService::new(repo, rng)))
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

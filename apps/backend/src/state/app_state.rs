use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::config::db::StoreKind;
use crate::repos::DeckRepo;
use crate::services::decks::DeckService;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (absent for the in-memory store)
    pub db: Option<DatabaseConnection>,
    /// Which store backs the deck repository
    pub store: StoreKind,
    pub decks: Arc<DeckService>,
}

impl AppState {
    pub fn new(db: Option<DatabaseConnection>, store: StoreKind, decks: DeckService) -> Self {
        Self {
            db,
            store,
            decks: Arc::new(decks),
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn deck_repo(&self) -> &Arc<dyn DeckRepo> {
        self.decks.repo()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("store", &self.store)
            .field("has_db", &self.db.is_some())
            .finish_non_exhaustive()
    }
}

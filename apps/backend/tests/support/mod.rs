#![allow(dead_code)]


pub use app_builder::create_test_app;
pub use faulty_repo::FaultyRepo;

use std::sync::Arc;

use deck_backend::domain::DeckRng;
use deck_backend::repos::DeckRepo;
use deck_backend::DeckService;

/// Fixed seed so shuffled decks are reproducible across runs.
pub const TEST_SEED: u64 = 0x5eed;

pub fn service_over(repo: Arc<dyn DeckRepo>) -> DeckService {
    DeckService::new(repo, DeckRng::seeded(TEST_SEED))
}

//! Adapters for external dependencies.

pub mod decks_memory;
pub mod decks_sea;

pub use decks_memory::InMemoryDeckRepo;
pub use decks_sea::DeckRepoSea;

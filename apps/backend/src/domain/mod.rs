//! Domain layer: pure deck and card logic.

pub mod card_view;
pub mod cards_parsing;
pub mod cards_types;
pub mod deck;
pub mod shuffle;
pub mod validation;

#[cfg(test)]
mod tests_props_cards;

// Re-exports for ergonomics
pub use card_view::CardView;
pub use cards_types::{Card, Rank, Suit, RANKS, SUITS};
pub use deck::{default_codes, default_deck, FULL_DECK_SIZE};
pub use shuffle::DeckRng;
pub use validation::{parse_card_codes, split_card_list, validate_cards};

pub mod deck_query;

pub use deck_query::{CreateDeckQuery, DrawCount};

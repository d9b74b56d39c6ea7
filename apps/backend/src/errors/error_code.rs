//! Error codes for the deck API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses.

use core::fmt;

/// Centralized error codes for the deck API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Card code is not `<rank><suit>`
    InvalidCardCode,
    /// Card code appears more than once
    DuplicateCardCode,
    /// `shuffled` query parameter is not a boolean
    InvalidShuffledFlag,
    /// `count` is missing, not an integer, or outside 1..=52
    InvalidCount,
    /// `count` is larger than the cards left in the deck
    CountExceedsRemaining,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    /// Deck not found
    DeckNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Deck changed between read and write
    OptimisticLock,
    /// Unique constraint violation
    UniqueViolation,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Stored data failed validation on read
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCardCode => "INVALID_CARD_CODE",
            Self::DuplicateCardCode => "DUPLICATE_CARD_CODE",
            Self::InvalidShuffledFlag => "INVALID_SHUFFLED_FLAG",
            Self::InvalidCount => "INVALID_COUNT",
            Self::CountExceedsRemaining => "COUNT_EXCEEDS_REMAINING",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::DeckNotFound => "DECK_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::OptimisticLock => "OPTIMISTIC_LOCK",
            Self::UniqueViolation => "UNIQUE_VIOLATION",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

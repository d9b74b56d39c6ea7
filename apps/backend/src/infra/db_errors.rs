//! SeaORM -> DomainError translation helpers.
//!
//! Adapters convert `sea_orm::DbErr` into `DomainError` here; higher layers
//! then map `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::redact::Redacted;
use crate::trace_ctx;

/// Prefix for the structured conflict raised by a failed conditional update.
pub const OPTIMISTIC_LOCK_PREFIX: &str = "OPTIMISTIC_LOCK:";
/// Prefix for "deck vanished between read and write".
pub const DECK_NOT_FOUND_PREFIX: &str = "DECK_NOT_FOUND:";

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

fn is_unique_violation(msg: &str) -> bool {
    mentions_sqlstate(msg, "23505")
        || msg.contains("duplicate key value violates unique constraint")
        || msg.contains("UNIQUE constraint failed")
}

/// Payload of an `OPTIMISTIC_LOCK:` custom error.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct LockInfo {
    pub deck_id: String,
    pub expected: i32,
    pub actual: i32,
}

impl LockInfo {
    pub fn into_db_err(self) -> sea_orm::DbErr {
        // serde_json on a plain struct of strings and ints cannot fail
        let json = serde_json::to_string(&self).unwrap_or_default();
        sea_orm::DbErr::Custom(format!("{OPTIMISTIC_LOCK_PREFIX}{json}"))
    }
}

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
///
/// The original `DbErr` rides along as the cause for infra failures so the
/// response layer can log it without exposing it to clients.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "record not found");
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with(DECK_NOT_FOUND_PREFIX) => {
            let id = msg.trim_start_matches(DECK_NOT_FOUND_PREFIX);
            warn!(trace_id = %trace_id, deck_id = %id, "Deck disappeared during update");
            return DomainError::not_found(
                NotFoundKind::Deck,
                format!("deck with id {id} wasn't found"),
            );
        }
        sea_orm::DbErr::Custom(msg) if msg.starts_with(OPTIMISTIC_LOCK_PREFIX) => {
            let json_str = msg.trim_start_matches(OPTIMISTIC_LOCK_PREFIX);
            if let Ok(info) = serde_json::from_str::<LockInfo>(json_str) {
                warn!(
                    trace_id = %trace_id,
                    deck_id = %info.deck_id,
                    expected = info.expected,
                    actual = info.actual,
                    "Optimistic lock conflict detected"
                );
                return DomainError::conflict(
                    ConflictKind::OptimisticLock,
                    format!(
                        "deck {} was modified concurrently (expected {} remaining, found {}); retry the draw",
                        info.deck_id, info.expected, info.actual
                    ),
                );
            }
            warn!(trace_id = %trace_id, "Optimistic lock conflict detected (details unavailable)");
            return DomainError::conflict(
                ConflictKind::OptimisticLock,
                "deck was modified concurrently; retry the draw",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::wrap(InfraErrorKind::DbUnavailable, "database unavailable", e);
        }
        _ => {}
    }

    if is_unique_violation(&error_msg) {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");
        if error_msg.contains("decks.id") || error_msg.contains("decks_pkey") {
            return DomainError::conflict(ConflictKind::DuplicateDeckId, "deck id already exists");
        }
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "unique constraint violation",
        );
    }

    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::wrap(InfraErrorKind::Timeout, "database timeout", e);
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::wrap(
        InfraErrorKind::Other("DbErr".into()),
        "database operation failed",
        e,
    )
}

use std::fmt;
use std::str::FromStr;

use super::{must_var, opt_var};
use crate::error::AppError;

pub const DEFAULT_SQLITE_PATH: &str = "./decks.sqlite";

/// Which backing store the deck repository uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// PostgreSQL via SeaORM (production)
    Postgres,
    /// SQLite file via SeaORM
    SqliteFile,
    /// SQLite in-memory via SeaORM (single connection)
    SqliteMemory,
    /// Process-local map, nothing persisted
    Memory,
}

impl StoreKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKind::Postgres => "postgres",
            StoreKind::SqliteFile => "sqlite-file",
            StoreKind::SqliteMemory => "sqlite-memory",
            StoreKind::Memory => "memory",
        }
    }

    /// Whether this store is backed by a SeaORM connection.
    pub fn is_sql(self) -> bool {
        !matches!(self, StoreKind::Memory)
    }

    /// Read `DECK_STORE`, defaulting to Postgres.
    pub fn from_env() -> Result<Self, AppError> {
        match opt_var("DECK_STORE") {
            None => Ok(StoreKind::Postgres),
            Some(raw) => raw.parse(),
        }
    }
}

impl FromStr for StoreKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(StoreKind::Postgres),
            "sqlite-file" | "sqlite" => Ok(StoreKind::SqliteFile),
            "sqlite-memory" | "sqlite-mem" => Ok(StoreKind::SqliteMemory),
            "memory" | "mem" => Ok(StoreKind::Memory),
            other => Err(AppError::config(format!(
                "Unknown DECK_STORE '{other}' (expected postgres, sqlite-file, sqlite-memory or memory)"
            ))),
        }
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds a connection URL for the given SQL store from environment variables.
///
/// Returns an error for [`StoreKind::Memory`], which has no URL.
pub fn db_url(kind: StoreKind) -> Result<String, AppError> {
    match kind {
        StoreKind::Postgres => {
            let host = opt_var("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
            let port = opt_var("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
            let db_name = must_var("PROD_DB")?;
            let username = must_var("APP_DB_USER")?;
            let password = must_var("APP_DB_PASSWORD")?;
            Ok(format!(
                "postgresql://{username}:{password}@{host}:{port}/{db_name}"
            ))
        }
        StoreKind::SqliteFile => {
            let path = opt_var("SQLITE_PATH").unwrap_or_else(|| DEFAULT_SQLITE_PATH.to_string());
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        StoreKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
        StoreKind::Memory => Err(AppError::config(
            "the in-memory store has no database URL",
        )),
    }
}

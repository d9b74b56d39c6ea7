use std::time::Duration;

use super::{opt_var, parse_var};
use crate::config::db::StoreKind;
use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 15;

/// Process-level settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreKind,
    /// Fixed seed for reproducible shuffles; `None` seeds from the OS.
    pub shuffle_seed: Option<u64>,
    pub shutdown_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            host: opt_var("BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_var("BACKEND_PORT")?.unwrap_or(DEFAULT_PORT),
            store: StoreKind::from_env()?,
            shuffle_seed: parse_var("DECK_SHUFFLE_SEED")?,
            shutdown_timeout: Duration::from_secs(
                parse_var("SHUTDOWN_TIMEOUT_SECS")?.unwrap_or(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
            ),
        })
    }

    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

//! Environment-driven configuration. No config files are read.

pub mod db;
pub mod server;

use std::env;
use std::str::FromStr;

use crate::error::AppError;

/// Get required environment variable or return error
pub(crate) fn must_var(name: &str) -> Result<String, AppError> {
    env::var(name)
        .map_err(|_| AppError::config(format!("Required environment variable '{name}' is not set")))
}

/// Read an optional variable, treating unset and blank as absent.
pub(crate) fn opt_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse an optional variable, failing loudly on a malformed value.
pub(crate) fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match opt_var(name) {
        None => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(|_| {
            AppError::config(format!("Environment variable '{name}' has invalid value '{raw}'"))
        }),
    }
}

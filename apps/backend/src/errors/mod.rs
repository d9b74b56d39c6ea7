//! Error handling for the deck backend.

pub mod domain;
pub mod error_code;


pub use domain::{DomainError, ErrorKind};
pub use error_code::ErrorCode;

//! Domain-level error type used across services and adapters.
//!
//! This error type is HTTP- and DB-agnostic. Handlers return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation,
//! which switches on [`DomainError::kind`].

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::sync::Arc;

/// Underlying cause carried by infrastructure failures.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// Coarse error classification used by the transport mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Caller supplied bad input; never retried.
    ClientInput,
    /// The addressed deck does not exist.
    NotFound,
    /// The deck changed between read and write.
    Conflict,
    /// Storage or other operational failure.
    Server,
}

/// Validation failure kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    InvalidCardCode,
    DuplicateCardCode,
    InvalidShuffledFlag,
    InvalidCount,
    CountOutOfRange,
    CountExceedsRemaining,
    Other(String),
}

/// Domain-level not found entities
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Deck,
    Other(String),
}

/// Domain-level conflict kinds
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    OptimisticLock,
    DuplicateDeckId,
    Other(String),
}

/// Infra error kinds to distinguish operational failures
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InfraErrorKind {
    Timeout,
    DbUnavailable,
    DataCorruption,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone)]
pub enum DomainError {
    /// Input validation or business rule violation
    Validation(ValidationKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Infrastructure/operational failures
    Infra {
        kind: InfraErrorKind,
        detail: String,
        cause: Option<Cause>,
    },
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::Infra { kind, detail, .. } => write!(f, "infra {kind:?}: {detail}"),
        }
    }
}

impl Error for DomainError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DomainError::Infra {
                cause: Some(cause), ..
            } => Some(&**cause),
            _ => None,
        }
    }
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }

    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }

    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }

    pub fn infra(kind: InfraErrorKind, detail: impl Into<String>) -> Self {
        Self::Infra {
            kind,
            detail: detail.into(),
            cause: None,
        }
    }

    /// Infra failure that keeps the underlying error for logging.
    pub fn wrap<E>(kind: InfraErrorKind, detail: impl Into<String>, cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Infra {
            kind,
            detail: detail.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    /// Re-label an infra failure with a caller-level message, keeping its cause.
    ///
    /// Non-infra errors pass through untouched.
    pub fn context(self, detail: impl Into<String>) -> Self {
        match self {
            DomainError::Infra { kind, detail: inner, cause } => DomainError::Infra {
                kind,
                detail: detail.into(),
                cause: cause.or_else(|| Some(Arc::new(Message(inner)) as Cause)),
            },
            other => other,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation(..) => ErrorKind::ClientInput,
            DomainError::NotFound(..) => ErrorKind::NotFound,
            DomainError::Conflict(..) => ErrorKind::Conflict,
            DomainError::Infra { .. } => ErrorKind::Server,
        }
    }

    /// Human-readable message without the kind prefix.
    pub fn detail(&self) -> &str {
        match self {
            DomainError::Validation(_, d)
            | DomainError::NotFound(_, d)
            | DomainError::Conflict(_, d) => d,
            DomainError::Infra { detail, .. } => detail,
        }
    }

    pub fn cause(&self) -> Option<&Cause> {
        match self {
            DomainError::Infra { cause, .. } => cause.as_ref(),
            _ => None,
        }
    }
}

/// Plain-text cause used when an infra error is re-labelled without a source.
#[derive(Debug)]
struct Message(String);

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl Error for Message {}

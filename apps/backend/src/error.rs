use actix_web::error::ResponseError;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::errors::domain::{
    Cause, ConflictKind, DomainError, ErrorKind, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::errors::ErrorCode;
use crate::logging::redact::Redacted;
use crate::trace_ctx;

/// Detail sent to clients for every 5xx response; the real cause is only logged.
const GENERIC_INTERNAL_DETAIL: &str = "internal server error";

#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Internal error: {detail}")]
    Internal {
        code: ErrorCode,
        detail: String,
        #[source]
        source: Option<Cause>,
    },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Database unavailable")]
    DbUnavailable {
        #[source]
        source: Option<Cause>,
    },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. }
            | AppError::BadRequest { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::Conflict { code, .. }
            | AppError::Internal { code, .. } => *code,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::DbUnavailable { .. } => ErrorCode::DbUnavailable,
        }
    }

    /// Detail exposed in the response body. Server-side failures never leak their detail.
    fn public_detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. }
            | AppError::BadRequest { detail, .. }
            | AppError::NotFound { detail, .. }
            | AppError::Conflict { detail, .. } => detail.clone(),
            AppError::Internal { .. } | AppError::Config { .. } | AppError::DbUnavailable { .. } => {
                GENERIC_INTERNAL_DETAIL.to_string()
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } | AppError::Config { .. } | AppError::DbUnavailable { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn internal(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Internal {
            code,
            detail: detail.into(),
            source: None,
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn db_unavailable(source: Option<Cause>) -> Self {
        Self::DbUnavailable { source }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err.kind() {
            ErrorKind::ClientInput => {
                let code = match &err {
                    DomainError::Validation(ValidationKind::InvalidCardCode, _) => {
                        ErrorCode::InvalidCardCode
                    }
                    DomainError::Validation(ValidationKind::DuplicateCardCode, _) => {
                        ErrorCode::DuplicateCardCode
                    }
                    DomainError::Validation(ValidationKind::InvalidShuffledFlag, _) => {
                        ErrorCode::InvalidShuffledFlag
                    }
                    DomainError::Validation(
                        ValidationKind::InvalidCount | ValidationKind::CountOutOfRange,
                        _,
                    ) => ErrorCode::InvalidCount,
                    DomainError::Validation(ValidationKind::CountExceedsRemaining, _) => {
                        ErrorCode::CountExceedsRemaining
                    }
                    _ => ErrorCode::ValidationError,
                };
                AppError::invalid(code, err.detail())
            }
            ErrorKind::NotFound => {
                let code = match &err {
                    DomainError::NotFound(NotFoundKind::Deck, _) => ErrorCode::DeckNotFound,
                    _ => ErrorCode::NotFound,
                };
                AppError::not_found(code, err.detail())
            }
            ErrorKind::Conflict => {
                let code = match &err {
                    DomainError::Conflict(ConflictKind::OptimisticLock, _) => {
                        ErrorCode::OptimisticLock
                    }
                    DomainError::Conflict(ConflictKind::DuplicateDeckId, _) => {
                        ErrorCode::UniqueViolation
                    }
                    _ => ErrorCode::Conflict,
                };
                AppError::conflict(code, err.detail())
            }
            ErrorKind::Server => match err {
                DomainError::Infra {
                    kind: InfraErrorKind::DbUnavailable,
                    cause,
                    ..
                } => AppError::db_unavailable(cause),
                DomainError::Infra {
                    kind,
                    detail,
                    cause,
                } => {
                    let code = match kind {
                        InfraErrorKind::DataCorruption => ErrorCode::DataCorruption,
                        InfraErrorKind::Timeout => ErrorCode::DbTimeout,
                        _ => ErrorCode::DbError,
                    };
                    AppError::Internal {
                        code,
                        detail,
                        source: cause,
                    }
                }
                other => AppError::internal(ErrorCode::Internal, other.to_string()),
            },
        }
    }
}

impl From<std::env::VarError> for AppError {
    fn from(e: std::env::VarError) -> Self {
        AppError::config(format!("env var error: {e}"))
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        crate::infra::db_errors::map_db_err(e).into()
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code();
        let trace_id = trace_ctx::trace_id();

        if status.is_server_error() {
            let cause = std::error::Error::source(self).map(|c| Redacted(&c.to_string()).to_string());
            error!(
                trace_id = %trace_id,
                code = %code,
                error = %Redacted(&self.to_string()),
                cause = cause.as_deref().unwrap_or("none"),
                "request failed"
            );
        }

        let problem_details = ProblemDetails {
            type_: format!("https://decks.local/errors/{}", code.as_str()),
            title: Self::humanize_code(code.as_str()),
            status: status.as_u16(),
            detail: self.public_detail(),
            code: code.as_str().to_string(),
            trace_id: trace_id.clone(),
        };

        HttpResponse::build(status)
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id))
            .json(problem_details)
    }
}

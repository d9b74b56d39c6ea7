//! Query-string extractors for the deck endpoints.
//!
//! Parameters are read the way a URL query `get` would: the first value for a
//! key wins and a missing key reads as empty.

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::services::decks::CreateDeck;

pub const SHUFFLED_NOT_BOOLEAN: &str = "shuffled must be boolean";
pub const COUNT_NOT_INTEGER: &str = "count must be an integer";

fn first_value(req: &HttpRequest, key: &str) -> Result<Option<String>, AppError> {
    let pairs = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
        .map_err(|e| AppError::bad_request(ErrorCode::BadRequest, format!("malformed query string: {e}")))?;
    Ok(pairs
        .into_inner()
        .into_iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v))
}

/// Boolean spellings accepted for `shuffled`. Empty means false.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw {
        "" => Some(false),
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// `?cards=<csv>&shuffled=<bool>` for deck creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDeckQuery(pub CreateDeck);

impl CreateDeckQuery {
    fn from_req(req: &HttpRequest) -> Result<Self, AppError> {
        let raw_flag = first_value(req, "shuffled")?.unwrap_or_default();
        let shuffled = parse_flag(&raw_flag)
            .ok_or_else(|| AppError::bad_request(ErrorCode::InvalidShuffledFlag, SHUFFLED_NOT_BOOLEAN))?;
        let cards = first_value(req, "cards")?.filter(|c| !c.is_empty());
        Ok(Self(CreateDeck { shuffled, cards }))
    }

    pub fn into_inner(self) -> CreateDeck {
        self.0
    }
}

impl FromRequest for CreateDeckQuery {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_req(req))
    }
}

/// `?count=<int>` for drawing. Range checks belong to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCount(pub i64);

impl FromRequest for DrawCount {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let parsed = first_value(req, "count").and_then(|raw| {
            raw.as_deref()
                .and_then(|v| v.parse::<i64>().ok())
                .map(DrawCount)
                .ok_or_else(|| AppError::bad_request(ErrorCode::InvalidCount, COUNT_NOT_INTEGER))
        });
        ready(parsed)
    }
}

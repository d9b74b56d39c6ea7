use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::AppError;
use crate::logging::redact::Redacted;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "ok" when the store answered its probe, "degraded" otherwise
    pub status: String,
    pub app_version: String,
    pub store: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrations: Option<String>,
    pub time: String,
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let store_error = match app_state.deck_repo().ping().await {
        Ok(()) => None,
        Err(e) => Some(Redacted(e.detail()).to_string()),
    };

    let migrations = match (app_state.db(), &store_error) {
        (Some(db), None) => Some(match get_latest_migration_version(db).await {
            Ok(Some(version)) => version,
            Ok(None) => "no_migrations".to_string(),
            Err(_) => "unknown".to_string(),
        }),
        _ => None,
    };

    let response = HealthResponse {
        status: if store_error.is_none() { "ok" } else { "degraded" }.to_string(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        store: app_state.store.as_str().to_string(),
        store_error,
        migrations,
        time,
    };

    Ok(HttpResponse::Ok().json(response))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}

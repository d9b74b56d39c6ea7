use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use tracing::{info, warn};

use crate::config::db::{db_url, StoreKind};
use crate::error::AppError;
use crate::logging::redact::Redacted;

/// Lifetime and idle timeout for the single `sqlite::memory:` connection.
/// The database lives only as long as that connection, so sqlx must never
/// recycle it; sea-orm cannot unset the limits, only raise them.
pub const SQLITE_MEMORY_CONN_LIFETIME: Duration = Duration::from_secs(u32::MAX as u64);

/// Retry a connection attempt with fixed interval delays.
/// Returns the result of the last attempt after all retries are exhausted.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(attempt, max_attempts, interval_ms, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

fn connect_options(kind: StoreKind, url: &str) -> ConnectOptions {
    let mut opt = ConnectOptions::new(url);
    opt.acquire_timeout(Duration::from_secs(2)).sqlx_logging(false);
    match kind {
        // each sqlite::memory: connection is its own database
        StoreKind::SqliteMemory => {
            opt.min_connections(1)
                .max_connections(1)
                .max_lifetime(SQLITE_MEMORY_CONN_LIFETIME)
                .idle_timeout(SQLITE_MEMORY_CONN_LIFETIME);
        }
        StoreKind::SqliteFile => {
            opt.max_connections(4);
        }
        _ => {
            opt.max_connections(16);
        }
    }
    opt
}

/// Open a connection pool for the given SQL store.
/// This function does NOT run any migrations.
pub async fn connect_db(kind: StoreKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind)?;
    let opt = connect_options(kind, &url);

    if matches!(kind, StoreKind::Postgres) {
        // Postgres may still be starting next to us; local SQLite never is
        retry_connection(
            || {
                let opt = opt.clone();
                let target = Redacted(&url).to_string();
                async move {
                    Database::connect(opt).await.map_err(|e| {
                        warn!(error = %Redacted(&e.to_string()), "postgres connect failed");
                        AppError::config(format!("failed to connect to {target}"))
                    })
                }
            },
            5,
            500,
        )
        .await
    } else {
        Database::connect(opt)
            .await
            .map_err(|e| AppError::config(format!("failed to connect to database: {e}")))
    }
}

/// Connect and bring the schema up to date. Single entrypoint used by the
/// server and the test state builder.
pub async fn bootstrap_db(kind: StoreKind) -> Result<DatabaseConnection, AppError> {
    info!(store = %kind, pid = std::process::id(), "bootstrap=start");

    let conn = connect_db(kind).await?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("migrations failed: {e}")))?;

    info!(store = %kind, "bootstrap=ready");
    Ok(conn)
}

/// Cheap liveness probe for a SeaORM connection.
pub async fn ping(conn: &DatabaseConnection) -> Result<(), sea_orm::DbErr> {
    let backend = conn.get_database_backend();
    conn.execute(Statement::from_string(backend, "SELECT 1".to_owned()))
        .await
        .map(|_| ())
}

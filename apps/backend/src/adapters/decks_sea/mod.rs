//! SeaORM adapter for the deck repository.
//!
//! Free functions are generic over `ConnectionTrait` and return `DbErr`;
//! [`DeckRepoSea`] maps them into `DomainError`.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::entities::decks;
use crate::errors::domain::DomainError;
use crate::infra::db_errors::{self, LockInfo, DECK_NOT_FOUND_PREFIX};
use crate::repos::decks::{Deck, DeckRepo, DeckUpdate};

pub mod dto;

pub async fn insert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    model: decks::ActiveModel,
) -> Result<(), sea_orm::DbErr> {
    decks::Entity::insert(model)
        .exec_without_returning(conn)
        .await
        .map(|_| ())
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
) -> Result<Option<decks::Model>, sea_orm::DbErr> {
    decks::Entity::find_by_id(id.to_owned()).one(conn).await
}

/// Overwrite a deck's cards only if `remaining` still holds the value the
/// caller read.
///
/// When no row matches, the deck is refetched to tell a lost race
/// (`OPTIMISTIC_LOCK:`) from a deleted deck (`DECK_NOT_FOUND:`).
pub async fn conditional_update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    id: &str,
    expected_remaining: i32,
    remaining: i32,
    shuffled: bool,
    cards: serde_json::Value,
) -> Result<(), sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();

    let result = decks::Entity::update_many()
        .col_expr(decks::Column::Shuffled, Expr::val(shuffled).into())
        .col_expr(decks::Column::Remaining, Expr::val(remaining).into())
        .col_expr(decks::Column::Cards, Expr::val(cards).into())
        .col_expr(decks::Column::UpdatedAt, Expr::val(now).into())
        .filter(decks::Column::Id.eq(id))
        .filter(decks::Column::Remaining.eq(expected_remaining))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return match find_by_id(conn, id).await? {
            Some(current) => Err(LockInfo {
                deck_id: id.to_string(),
                expected: expected_remaining,
                actual: current.remaining,
            }
            .into_db_err()),
            None => Err(sea_orm::DbErr::Custom(format!("{DECK_NOT_FOUND_PREFIX}{id}"))),
        };
    }
    Ok(())
}

/// SeaORM implementation of [`DeckRepo`].
#[derive(Debug, Clone)]
pub struct DeckRepoSea {
    conn: DatabaseConnection,
}

impl DeckRepoSea {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}

#[async_trait]
impl DeckRepo for DeckRepoSea {
    async fn create(&self, deck: &Deck) -> Result<(), DomainError> {
        let model = dto::active_model_for(deck)?;
        insert(&self.conn, model)
            .await
            .map_err(db_errors::map_db_err)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Deck>, DomainError> {
        find_by_id(&self.conn, id)
            .await
            .map_err(db_errors::map_db_err)?
            .map(dto::deck_from_model)
            .transpose()
    }

    async fn update(&self, update: &DeckUpdate) -> Result<(), DomainError> {
        conditional_update(
            &self.conn,
            &update.id,
            dto::remaining_to_db(&update.id, update.expected_remaining)?,
            dto::remaining_to_db(&update.id, update.remaining)?,
            update.shuffled,
            dto::cards_to_json(&update.cards),
        )
        .await
        .map_err(db_errors::map_db_err)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        crate::infra::db::ping(&self.conn)
            .await
            .map_err(db_errors::map_db_err)
    }

    fn backend_name(&self) -> &'static str {
        match self.conn.get_database_backend() {
            sea_orm::DatabaseBackend::Postgres => "postgres",
            sea_orm::DatabaseBackend::Sqlite => "sqlite",
            _ => "sql",
        }
    }
}

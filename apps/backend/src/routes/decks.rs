//! Deck HTTP routes.

use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::{CreateDeckQuery, DrawCount};
use crate::protocol::DrawnCards;
use crate::state::app_state::AppState;

/// POST /decks?cards=<csv>&shuffled=<bool>
///
/// Creates a full 52-card deck, or a custom one from `cards`, shuffled when
/// asked. Responds 201 with the new deck's summary.
async fn create_deck(
    query: CreateDeckQuery,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let created = app_state.decks.create_deck(query.into_inner()).await?;
    Ok(HttpResponse::Created().json(created))
}

/// GET /decks/{deck_id}
async fn open_deck(
    path: web::Path<String>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let deck = app_state.decks.get_deck_by_id(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(deck))
}

/// PUT /decks/{deck_id}/cards?count=<int>
///
/// Draws `count` cards off the top. The deck's new remainder is stored
/// before the cards are returned.
async fn draw_cards(
    path: web::Path<String>,
    count: DrawCount,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let cards = app_state
        .decks
        .draw_cards(&path.into_inner(), count.0)
        .await?;
    Ok(HttpResponse::Created().json(DrawnCards { cards }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("", web::post().to(create_deck))
        .route("/{deck_id}", web::get().to(open_deck))
        .route("/{deck_id}/cards", web::put().to(draw_cards));
}

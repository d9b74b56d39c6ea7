use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use deck_backend::protocol::{CreatedDeck, OpenDeck};
use deck_backend::AppError;
use serde_json::{json, Value};

use crate::common::read_json;
use crate::support::app_builder::{memory_state, sqlite_state};
use crate::support::create_test_app;

#[actix_web::test]
async fn opens_a_created_deck() -> Result<(), AppError> {
    let app = create_test_app(memory_state().await?)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/decks?cards=AS,KD,10C")
        .to_request();
    let created: CreatedDeck = read_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::get()
        .uri(&format!("/decks/{}", created.deck_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: Value = read_json(resp).await;
    assert_eq!(
        body,
        json!({
            "deck_id": created.deck_id,
            "shuffled": false,
            "remaining": 3,
            "cards": [
                {"value": "ACE", "suit": "SPADES", "code": "AS"},
                {"value": "KING", "suit": "DIAMONDS", "code": "KD"},
                {"value": "10", "suit": "CLUBS", "code": "10C"}
            ]
        })
    );
    Ok(())
}

#[actix_web::test]
async fn lower_case_codes_are_stored_upper_case() -> Result<(), AppError> {
    let app = create_test_app(memory_state().await?)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post().uri("/decks?cards=qh,10d").to_request();
    let created: CreatedDeck = read_json(test::call_service(&app, req).await).await;

    let req = test::TestRequest::get()
        .uri(&format!("/decks/{}", created.deck_id))
        .to_request();
    let open: OpenDeck = read_json(test::call_service(&app, req).await).await;
    let codes: Vec<&str> = open.cards.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, ["QH", "10D"]);
    Ok(())
}

#[actix_web::test]
async fn unknown_deck_is_404() -> Result<(), AppError> {
    let app = create_test_app(memory_state().await?)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/decks/does-not-exist").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "DECK_NOT_FOUND",
        StatusCode::NOT_FOUND,
        Some("deck with id does-not-exist wasn't found"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn sqlite_store_serves_the_same_contract() -> Result<(), AppError> {
    let app = create_test_app(sqlite_state().await?)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post().uri("/decks?shuffled=true").to_request();
    let created: CreatedDeck = read_json(test::call_service(&app, req).await).await;
    assert_eq!(created.remaining, 52);

    let req = test::TestRequest::get()
        .uri(&format!("/decks/{}", created.deck_id))
        .to_request();
    let first: OpenDeck = read_json(test::call_service(&app, req).await).await;
    let req = test::TestRequest::get()
        .uri(&format!("/decks/{}", created.deck_id))
        .to_request();
    let second: OpenDeck = read_json(test::call_service(&app, req).await).await;

    assert!(first.shuffled);
    assert_eq!(first.cards.len(), 52);
    assert_eq!(first, second);
    Ok(())
}

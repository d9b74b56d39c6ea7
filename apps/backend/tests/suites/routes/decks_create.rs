use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use deck_backend::protocol::CreatedDeck;
use deck_backend::AppError;
use serde_json::Value;

use crate::common::read_json;
use crate::support::app_builder::memory_state;
use crate::support::create_test_app;

#[actix_web::test]
async fn creates_a_full_deck() -> Result<(), AppError> {
    let app = create_test_app(memory_state().await?)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post().uri("/decks").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let body: Value = read_json(resp).await;
    let fields: Vec<&str> = body.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(fields.len(), 3, "unexpected fields: {fields:?}");
    assert_eq!(body["shuffled"], false);
    assert_eq!(body["remaining"], 52);
    assert!(uuid::Uuid::parse_str(body["deck_id"].as_str().unwrap()).is_ok());
    Ok(())
}

#[actix_web::test]
async fn creates_a_custom_shuffled_deck() -> Result<(), AppError> {
    let app = create_test_app(memory_state().await?)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/decks?cards=AS,KD,AC,2C,KH&shuffled=true")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: CreatedDeck = read_json(resp).await;
    assert!(created.shuffled);
    assert_eq!(created.remaining, 5);
    Ok(())
}

#[actix_web::test]
async fn accepts_boolean_spellings() -> Result<(), AppError> {
    let app = create_test_app(memory_state().await?)
        .with_prod_routes()
        .build()
        .await;

    for (raw, expected) in [("1", true), ("T", true), ("TRUE", true), ("0", false), ("f", false), ("", false)] {
        let req = test::TestRequest::post()
            .uri(&format!("/decks?shuffled={raw}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED, "shuffled={raw}");
        let created: CreatedDeck = read_json(resp).await;
        assert_eq!(created.shuffled, expected, "shuffled={raw}");
    }
    Ok(())
}

#[actix_web::test]
async fn rejects_non_boolean_shuffled() -> Result<(), AppError> {
    let app = create_test_app(memory_state().await?)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/decks?shuffled=maybe")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_SHUFFLED_FLAG",
        StatusCode::BAD_REQUEST,
        Some("shuffled must be boolean"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn rejects_invalid_and_duplicate_codes() -> Result<(), AppError> {
    let app = create_test_app(memory_state().await?)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post().uri("/decks?cards=XYZ").to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "INVALID_CARD_CODE",
        StatusCode::BAD_REQUEST,
        Some("contains invalid card code"),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/decks?cards=2H,2H,3C,4D")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_problem_details_from_service_response(
        resp,
        "DUPLICATE_CARD_CODE",
        StatusCode::BAD_REQUEST,
        Some("contains duplicate"),
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn blank_card_list_is_rejected() -> Result<(), AppError> {
    let app = create_test_app(memory_state().await?)
        .with_prod_routes()
        .build()
        .await;

    for query in ["cards=%20", "cards=AS,%202S"] {
        let req = test::TestRequest::post()
            .uri(&format!("/decks?{query}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_problem_details_from_service_response(
            resp,
            "INVALID_CARD_CODE",
            StatusCode::BAD_REQUEST,
            Some("contains invalid card code"),
        )
        .await;
    }
    Ok(())
}

#[actix_web::test]
async fn first_query_value_wins() -> Result<(), AppError> {
    let app = create_test_app(memory_state().await?)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::post()
        .uri("/decks?cards=AS,2S&cards=XYZ&shuffled=false&shuffled=nope")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: CreatedDeck = read_json(resp).await;
    assert_eq!(created.remaining, 2);
    Ok(())
}

#[actix_web::test]
async fn wrong_method_is_not_routed() -> Result<(), AppError> {
    let app = create_test_app(memory_state().await?)
        .with_prod_routes()
        .build()
        .await;

    let req = test::TestRequest::get().uri("/decks").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
    Ok(())
}

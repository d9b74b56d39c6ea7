use actix_web::http::StatusCode;
use actix_web::test;
use deck_backend::AppError;

use crate::support::app_builder::memory_state;
use crate::support::create_test_app;

fn request_id(resp: &actix_web::dev::ServiceResponse) -> String {
    resp.headers()
        .get("x-request-id")
        .expect("x-request-id header")
        .to_str()
        .expect("ascii header")
        .to_string()
}

#[actix_web::test]
async fn every_response_carries_a_request_id() -> Result<(), AppError> {
    let app = create_test_app(memory_state().await?)
        .with_prod_routes()
        .build()
        .await;

    let first = test::call_service(&app, test::TestRequest::post().uri("/decks").to_request()).await;
    let second = test::call_service(&app, test::TestRequest::get().uri("/decks/x").to_request()).await;
    assert_eq!(first.status(), StatusCode::CREATED);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);

    let (a, b) = (request_id(&first), request_id(&second));
    assert!(uuid::Uuid::parse_str(&a).is_ok());
    assert_ne!(a, b);
    Ok(())
}

#[actix_web::test]
async fn unsafe_inbound_ids_are_replaced() -> Result<(), AppError> {
    let app = create_test_app(memory_state().await?)
        .with_prod_routes()
        .build()
        .await;

    let long = "a".repeat(65);
    for inbound in ["has space", "semi;colon", long.as_str()] {
        let req = test::TestRequest::post()
            .uri("/decks")
            .insert_header(("x-request-id", inbound))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let id = request_id(&resp);
        assert_ne!(id, inbound);
        assert!(uuid::Uuid::parse_str(&id).is_ok());
    }
    Ok(())
}

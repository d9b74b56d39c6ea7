use std::sync::Arc;

use deck_backend::errors::domain::{ConflictKind, DomainError, ErrorKind, ValidationKind};
use deck_backend::repos::Deck;
use deck_backend::AppError;

use crate::common::codes;
use crate::support::{service_over, FaultyRepo};

const FIVE: [&str; 5] = ["AH", "2C", "3D", "4S", "5H"];

async fn five_card_repo() -> Arc<FaultyRepo> {
    let repo = Arc::new(FaultyRepo::new());
    repo.seed(&Deck::new("d5", false, codes(&FIVE))).await;
    repo
}

#[tokio::test]
async fn draws_from_the_top_and_stores_the_rest() -> Result<(), AppError> {
    let repo = five_card_repo().await;
    let svc = service_over(repo.clone());

    let drawn = svc.draw_cards("d5", 3).await?;
    let drawn_codes: Vec<&str> = drawn.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(drawn_codes, ["AH", "2C", "3D"]);
    assert_eq!(drawn[0].value, "ACE");
    assert_eq!(drawn[0].suit, "HEARTS");

    let stored = repo.stored("d5").await.unwrap();
    assert_eq!(stored.remaining, 2);
    assert_eq!(stored.cards, codes(&["4S", "5H"]));
    assert!(!stored.shuffled);
    Ok(())
}

#[tokio::test]
async fn drawing_everything_leaves_an_empty_deck() -> Result<(), AppError> {
    let repo = five_card_repo().await;
    let svc = service_over(repo.clone());

    assert_eq!(svc.draw_cards("d5", 5).await?.len(), 5);
    let open = svc.get_deck_by_id("d5").await?;
    assert_eq!(open.remaining, 0);

    let err = svc.draw_cards("d5", 1).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Validation(ValidationKind::CountExceedsRemaining, _)
    ));
    Ok(())
}

#[tokio::test]
async fn overdraw_fails_without_writing() {
    let repo = five_card_repo().await;
    let svc = service_over(repo.clone());

    let err = svc.draw_cards("d5", 15).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ClientInput);
    assert_eq!(err.detail(), "count must be less or equal than deck's remaining");
    assert_eq!(repo.update_calls(), 0);
    assert_eq!(repo.stored("d5").await.unwrap().remaining, 5);
}

#[tokio::test]
async fn count_bounds_are_checked_before_storage() {
    // fail_find proves the store is never consulted
    let repo = Arc::new(FaultyRepo::new().fail_find());
    let svc = service_over(repo.clone());

    for count in [0, -1, 53, i64::MAX] {
        let err = svc.draw_cards("d5", count).await.unwrap_err();
        assert!(
            matches!(err, DomainError::Validation(ValidationKind::CountOutOfRange, _)),
            "count {count}: {err:?}"
        );
        assert_eq!(err.detail(), "count must be between 1 - 52");
    }
}

#[tokio::test]
async fn draw_on_unknown_deck_is_not_found() {
    let svc = service_over(Arc::new(FaultyRepo::new()));
    let err = svc.draw_cards("ghost", 1).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.detail().contains("ghost"));
}

#[tokio::test]
async fn failed_persist_fails_the_draw() {
    let repo = Arc::new(FaultyRepo::new().fail_update());
    repo.seed(&Deck::new("d5", false, codes(&FIVE))).await;
    let svc = service_over(repo.clone());

    let err = svc.draw_cards("d5", 2).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Server);
    assert_eq!(err.detail(), "couldn't update deck");
    assert_eq!(repo.update_calls(), 1);
    assert_eq!(repo.stored("d5").await.unwrap().cards, codes(&FIVE));
}

#[tokio::test]
async fn draw_from_a_stale_read_conflicts() -> Result<(), AppError> {
    let repo = Arc::new(FaultyRepo::new().stale_reads());
    repo.seed(&Deck::new("d5", false, codes(&FIVE))).await;
    let svc = service_over(repo.clone());

    // both draws compute from remaining=5; only the first may land
    svc.draw_cards("d5", 3).await?;
    let err = svc.draw_cards("d5", 3).await.unwrap_err();
    assert!(matches!(err, DomainError::Conflict(ConflictKind::OptimisticLock, _)));

    let stored = repo.stored("d5").await.unwrap();
    assert_eq!(stored.cards, codes(&["4S", "5H"]));
    Ok(())
}

#[tokio::test]
async fn successive_draws_walk_down_the_deck() -> Result<(), AppError> {
    let repo = five_card_repo().await;
    let svc = service_over(repo);

    let mut seen = Vec::new();
    for _ in 0..5 {
        let drawn = svc.draw_cards("d5", 1).await?;
        seen.push(drawn[0].code.clone());
    }
    assert_eq!(seen, codes(&FIVE));
    Ok(())
}

use std::sync::Arc;

use deck_backend::adapters::InMemoryDeckRepo;
use deck_backend::errors::domain::{DomainError, ErrorKind, NotFoundKind};
use deck_backend::repos::Deck;
use deck_backend::AppError;

use crate::common::codes;
use crate::support::{service_over, FaultyRepo};

#[tokio::test]
async fn unknown_id_is_not_found_and_names_the_id() {
    let svc = service_over(Arc::new(InMemoryDeckRepo::new()));
    let err = svc.get_deck_by_id("no-such-deck").await.unwrap_err();
    match &err {
        DomainError::NotFound(NotFoundKind::Deck, detail) => {
            assert_eq!(detail, "deck with id no-such-deck wasn't found");
        }
        other => panic!("expected deck not found, got {other:?}"),
    }
}

#[tokio::test]
async fn expands_codes_in_stored_order() -> Result<(), AppError> {
    let repo = Arc::new(FaultyRepo::new());
    repo.seed(&Deck::new("d1", true, codes(&["10C", "JD", "AH"]))).await;
    let svc = service_over(repo);

    let open = svc.get_deck_by_id("d1").await?;
    assert_eq!(open.deck_id, "d1");
    assert!(open.shuffled);
    assert_eq!(open.remaining, 3);

    let names: Vec<(&str, &str, &str)> = open
        .cards
        .iter()
        .map(|c| (c.value.as_str(), c.suit.as_str(), c.code.as_str()))
        .collect();
    assert_eq!(
        names,
        [
            ("10", "CLUBS", "10C"),
            ("JACK", "DIAMONDS", "JD"),
            ("ACE", "HEARTS", "AH"),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn repeated_reads_are_identical() -> Result<(), AppError> {
    let svc = service_over(Arc::new(InMemoryDeckRepo::new()));
    let created = svc
        .create_deck(deck_backend::CreateDeck {
            shuffled: true,
            cards: None,
        })
        .await?;

    let first = svc.get_deck_by_id(&created.deck_id).await?;
    let second = svc.get_deck_by_id(&created.deck_id).await?;
    assert_eq!(first, second);
    Ok(())
}

#[tokio::test]
async fn fetch_failure_is_a_server_error() {
    let svc = service_over(Arc::new(FaultyRepo::new().fail_find()));
    let err = svc.get_deck_by_id("any").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Server);
    assert_eq!(err.detail(), "couldn't get deck from the database");
}

#[tokio::test]
async fn empty_deck_opens_with_no_cards() -> Result<(), AppError> {
    let repo = Arc::new(FaultyRepo::new());
    repo.seed(&Deck::new("empty", false, Vec::new())).await;
    let svc = service_over(repo);

    let open = svc.get_deck_by_id("empty").await?;
    assert_eq!(open.remaining, 0);
    assert!(open.cards.is_empty());
    Ok(())
}

use roofing_backend::model::quote::NewQuoteRequest;
use roofing_backend::repository::quote_repo::{InMemoryQuoteRepository, QuoteRepository};
use roofing_backend::repository::repository_error::RepositoryError;
use uuid::Uuid;

fn new_quote(name: &str, email: &str) -> NewQuoteRequest {
    NewQuoteRequest {
        name: name.to_string(),
        email: email.to_string(),
        phone: "0400000000".to_string(),
        service_type: "Re-Roofing".to_string(),
        address: Some("12 Bedford Road, Blacktown".to_string()),
        message: Some("Roof is leaking near the ridge".to_string()),
    }
}

#[tokio::test]
async fn test_quote_repository_workflow() {
    let quote_repo = InMemoryQuoteRepository::new();

    // Insert a quote; id and timestamp are assigned by the store
    let inserted = quote_repo
        .create(new_quote("Jane Doe", "jane@example.com"))
        .await
        .expect("Failed to insert quote");
    assert_eq!(inserted.name, "Jane Doe");
    assert_eq!(inserted.email, "jane@example.com");

    // Get by id returns the exact submitted field values
    let fetched = quote_repo
        .get_by_id(inserted.id)
        .await
        .expect("Failed to get quote by id");
    assert_eq!(fetched, inserted);

    // Insert multiple quotes
    for i in 0..3 {
        quote_repo
            .create(new_quote(
                &format!("Test User {}", i),
                &format!("user{}@test.com", i),
            ))
            .await
            .expect("Failed to insert quote");
    }

    assert_eq!(quote_repo.count().await.expect("Failed to count"), 4);

    // List preserves insertion order
    let listed = quote_repo.list().await.expect("Failed to list quotes");
    assert_eq!(listed.len(), 4);
    assert_eq!(listed[0].name, "Jane Doe");
    assert_eq!(listed[1].name, "Test User 0");
    assert_eq!(listed[3].name, "Test User 2");
}

#[tokio::test]
async fn test_identical_submissions_create_distinct_records() {
    let quote_repo = InMemoryQuoteRepository::new();

    let first = quote_repo
        .create(new_quote("Jane Doe", "jane@example.com"))
        .await
        .expect("Failed to insert quote");
    let second = quote_repo
        .create(new_quote("Jane Doe", "jane@example.com"))
        .await
        .expect("Failed to insert quote");

    assert_ne!(first.id, second.id);
    assert_eq!(quote_repo.count().await.expect("Failed to count"), 2);
}

#[tokio::test]
async fn test_get_unknown_id_is_not_found() {
    let quote_repo = InMemoryQuoteRepository::new();

    let err = quote_repo
        .get_by_id(Uuid::new_v4())
        .await
        .expect_err("Expected lookup to fail");
    assert!(matches!(err, RepositoryError::NotFound(_)));
}

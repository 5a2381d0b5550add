use async_trait::async_trait;
use roofing_backend::dto::quote_dto::CreateQuoteRequest;
use roofing_backend::model::quote::{NewQuoteRequest, QuoteRequest};
use roofing_backend::repository::quote_repo::{InMemoryQuoteRepository, QuoteRepository};
use roofing_backend::repository::repository_error::{RepositoryError, RepositoryResult};
use roofing_backend::service::quote_service::{QuoteService, QuoteServiceImpl};
use roofing_backend::util::error::ServiceError;
use std::sync::Arc;
use uuid::Uuid;

fn valid_input() -> CreateQuoteRequest {
    CreateQuoteRequest {
        name: "Jane Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "0400000000".to_string(),
        service_type: "Re-Roofing".to_string(),
        address: Some("".to_string()),
        message: Some("".to_string()),
    }
}

fn service_with_store() -> (Arc<InMemoryQuoteRepository>, QuoteServiceImpl) {
    let repo = Arc::new(InMemoryQuoteRepository::new());
    let service = QuoteServiceImpl::new(repo.clone(), None);
    (repo, service)
}

/// Store that refuses every operation, standing in for an unreachable backend.
struct UnavailableQuoteRepository;

#[async_trait]
impl QuoteRepository for UnavailableQuoteRepository {
    async fn create(&self, _input: NewQuoteRequest) -> RepositoryResult<QuoteRequest> {
        Err(RepositoryError::unavailable("quote store offline"))
    }

    async fn get_by_id(&self, _id: Uuid) -> RepositoryResult<QuoteRequest> {
        Err(RepositoryError::unavailable("quote store offline"))
    }

    async fn list(&self) -> RepositoryResult<Vec<QuoteRequest>> {
        Err(RepositoryError::unavailable("quote store offline"))
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Err(RepositoryError::unavailable("quote store offline"))
    }
}

#[tokio::test]
async fn test_submit_quote_persists_and_returns_record() {
    let (repo, service) = service_with_store();

    let created = service
        .submit_quote(valid_input())
        .await
        .expect("Submission should succeed");

    assert_eq!(created.name, "Jane Doe");
    assert_eq!(created.email, "jane@example.com");
    assert_eq!(created.phone, "0400000000");
    assert_eq!(created.service_type, "Re-Roofing");

    // Retrievable by the returned id with exactly the submitted values
    let fetched = service
        .get_quote(created.id)
        .await
        .expect("Fetch by id should succeed");
    assert_eq!(fetched, created);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_submit_quote_with_empty_name_is_rejected() {
    let (repo, service) = service_with_store();

    let mut input = valid_input();
    input.name = "".to_string();

    let err = service
        .submit_quote(input)
        .await
        .expect_err("Submission should be rejected");
    match err {
        ServiceError::Validation(errors) => {
            assert!(errors.field_errors().contains_key("name"));
        }
        other => panic!("Expected validation error, got: {other}"),
    }

    // Nothing persisted
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_submit_quote_with_malformed_email_is_rejected() {
    let (repo, service) = service_with_store();

    for bad_email in ["", "janeexample.com", "jane@", "@example.com"] {
        let mut input = valid_input();
        input.email = bad_email.to_string();

        let err = service
            .submit_quote(input)
            .await
            .expect_err("Submission should be rejected");
        match err {
            ServiceError::Validation(errors) => {
                assert!(
                    errors.field_errors().contains_key("email"),
                    "email {bad_email:?} should fail on the email field"
                );
            }
            other => panic!("Expected validation error for {bad_email:?}, got: {other}"),
        }
    }

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_submit_quote_with_missing_required_fields_is_rejected() {
    let (repo, service) = service_with_store();

    for field in ["name", "email", "phone", "service_type"] {
        let mut input = valid_input();
        match field {
            "name" => input.name.clear(),
            "email" => input.email.clear(),
            "phone" => input.phone.clear(),
            "service_type" => input.service_type.clear(),
            _ => unreachable!(),
        }

        let err = service
            .submit_quote(input)
            .await
            .expect_err("Submission should be rejected");
        match err {
            ServiceError::Validation(errors) => {
                assert!(
                    errors.field_errors().contains_key(field),
                    "missing {field} should be reported on that field"
                );
            }
            other => panic!("Expected validation error for missing {field}, got: {other}"),
        }
    }

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_submit_quote_against_unavailable_store() {
    let service = QuoteServiceImpl::new(Arc::new(UnavailableQuoteRepository), None);

    let err = service
        .submit_quote(valid_input())
        .await
        .expect_err("Submission should fail");
    assert!(matches!(err, ServiceError::Unavailable(_)));
}

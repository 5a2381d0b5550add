use axum::Router;
use roofing_backend::client::{ApiClient, ContentView, FetchState, QuoteForm};
use roofing_backend::config::ClientConfig;
use roofing_backend::repository::content_repo::InMemoryContentRepository;
use roofing_backend::repository::quote_repo::InMemoryQuoteRepository;
use roofing_backend::router::api_router;
use roofing_backend::service::content_service::ContentServiceImpl;
use roofing_backend::service::quote_service::QuoteServiceImpl;
use std::net::SocketAddr;
use std::sync::Arc;

fn test_app() -> Router {
    let content_repo = Arc::new(InMemoryContentRepository::with_default_catalog());
    let quote_repo = Arc::new(InMemoryQuoteRepository::new());
    let content_service = Arc::new(ContentServiceImpl::new(content_repo));
    let quote_service = Arc::new(QuoteServiceImpl::new(quote_repo, None));
    api_router(content_service, quote_service)
}

/// Serve the API on an ephemeral loopback port.
async fn spawn_server() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = test_app();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// An address nothing is listening on.
async fn dead_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

fn client_for(addr: SocketAddr) -> ApiClient {
    let config = ClientConfig::new(format!("http://{}", addr)).with_timeout_secs(5);
    ApiClient::new(config).unwrap()
}

fn filled_form() -> QuoteForm {
    let mut form = QuoteForm::new();
    form.name = "Jane Doe".to_string();
    form.email = "jane@example.com".to_string();
    form.phone = "0400000000".to_string();
    form.service_type = "Re-Roofing".to_string();
    form.address = "12 Bedford Road".to_string();
    form.message = "Quote please".to_string();
    form
}

#[tokio::test]
async fn test_content_view_refresh_success() {
    let addr = spawn_server().await;
    let client = client_for(addr);

    let mut view = ContentView::new();
    assert_eq!(*view.services_state(), FetchState::Idle);

    view.refresh_services(&client).await;
    assert!(view.services_state().is_success());
    assert_eq!(view.services().len(), 5);
    assert_eq!(view.services()[0].id, "new-roof");

    view.refresh_projects(&client).await;
    assert!(view.projects_state().is_success());
    assert_eq!(view.projects().len(), 9);
}

#[tokio::test]
async fn test_content_view_keeps_previous_data_on_failure() {
    let addr = spawn_server().await;
    let client = client_for(addr);

    let mut view = ContentView::new();
    view.refresh_services(&client).await;
    assert_eq!(view.services().len(), 5);

    // Refresh against a server that is no longer reachable
    let dead_client = client_for(dead_addr().await);
    view.refresh_services(&dead_client).await;

    assert!(view.services_state().is_failure());
    // Previously displayed data is untouched
    assert_eq!(view.services().len(), 5);
}

#[tokio::test]
async fn test_content_view_failure_with_no_prior_data_is_empty() {
    let dead_client = client_for(dead_addr().await);

    let mut view = ContentView::new();
    view.refresh_projects(&dead_client).await;

    assert!(view.projects_state().is_failure());
    assert!(view.projects().is_empty());
}

#[tokio::test]
async fn test_quote_form_submit_success_clears_fields() {
    let addr = spawn_server().await;
    let client = client_for(addr);

    let mut form = filled_form();
    form.submit(&client).await;

    match form.state() {
        FetchState::Success(receipt) => {
            assert_eq!(receipt.name, "Jane Doe");
            assert_eq!(receipt.service_type, "Re-Roofing");
        }
        other => panic!("Expected success, got: {other:?}"),
    }

    // Form resets to initial empty values
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.phone.is_empty());
    assert!(form.service_type.is_empty());
}

#[tokio::test]
async fn test_quote_form_network_failure_preserves_fields() {
    let dead_client = client_for(dead_addr().await);

    let mut form = filled_form();
    form.submit(&dead_client).await;

    assert!(form.state().is_failure());
    // Entered values survive so resubmission needs no re-typing
    assert_eq!(form.name, "Jane Doe");
    assert_eq!(form.email, "jane@example.com");
    assert_eq!(form.phone, "0400000000");
    assert_eq!(form.service_type, "Re-Roofing");
    assert_eq!(form.address, "12 Bedford Road");
    assert_eq!(form.message, "Quote please");
}

#[tokio::test]
async fn test_quote_form_validation_failure_preserves_fields() {
    let addr = spawn_server().await;
    let client = client_for(addr);

    let mut form = filled_form();
    form.email = "not-an-email".to_string();
    form.submit(&client).await;

    match form.state() {
        FetchState::Failure(message) => {
            assert!(message.contains("400"), "message: {message}");
        }
        other => panic!("Expected failure, got: {other:?}"),
    }
    assert_eq!(form.name, "Jane Doe");
    assert_eq!(form.email, "not-an-email");
}

#[tokio::test]
async fn test_api_client_contact_info() {
    let addr = spawn_server().await;
    let client = client_for(addr);

    let info = client.contact_info().await.unwrap();
    assert_eq!(info.company_name, "22G Roofing Pty Ltd");
}

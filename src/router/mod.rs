pub mod content_router;
pub mod quote_router;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handler::content_handler::api_status_handler;
use crate::service::content_service::ContentServiceImpl;
use crate::service::quote_service::QuoteServiceImpl;

/// Full HTTP surface: content and quote routes nested under `/api`, plus the
/// bare `/health` probe.
pub fn api_router(
    content_service: Arc<ContentServiceImpl>,
    quote_service: Arc<QuoteServiceImpl>,
) -> Router {
    let api = Router::new()
        .route("/", get(api_status_handler))
        .merge(content_router::content_router(content_service))
        .merge(quote_router::quote_router(quote_service));

    Router::new()
        .nest("/api", api)
        .route("/health", get(|| async { "OK" }))
}

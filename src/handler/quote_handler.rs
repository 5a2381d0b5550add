use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::dto::quote_dto::CreateQuoteRequest;
use crate::service::quote_service::{QuoteService, QuoteServiceImpl};
use crate::util::error::HandlerError;

/// `POST /api/quote`. 201 with the created record, 400 with field detail on
/// validation failure, 503 when the store is unreachable.
pub async fn create_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Json(payload): Json<CreateQuoteRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[create_quote_handler] Handler called");
    let created = service
        .submit_quote(payload)
        .await
        .map_err(HandlerError::from)?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_quote_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, HandlerError> {
    let quote = service.get_quote(id).await.map_err(HandlerError::from)?;
    Ok(Json(quote))
}

pub async fn list_quotes_handler(
    State(service): State<Arc<QuoteServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let quotes = service.list_quotes().await.map_err(HandlerError::from)?;
    Ok(Json(quotes))
}

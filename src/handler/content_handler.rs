use axum::{extract::State, http::header, response::IntoResponse, Json};
use std::sync::Arc;

use crate::dto::quote_dto::ApiStatus;
use crate::service::content_service::{ContentService, ContentServiceImpl};
use crate::util::error::HandlerError;

pub async fn api_status_handler() -> impl IntoResponse {
    Json(ApiStatus {
        message: "22G Roofing API".to_string(),
        status: "active".to_string(),
    })
}

pub async fn list_services_handler(
    State(service): State<Arc<ContentServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let services = service.list_services().await.map_err(HandlerError::from)?;
    Ok((
        [(header::CACHE_CONTROL, "public, max-age=3600")],
        Json(services),
    ))
}

pub async fn list_projects_handler(
    State(service): State<Arc<ContentServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let projects = service.list_projects().await.map_err(HandlerError::from)?;
    Ok((
        [(header::CACHE_CONTROL, "public, max-age=1800")],
        Json(projects),
    ))
}

pub async fn contact_info_handler(
    State(service): State<Arc<ContentServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let info = service.contact_info().await.map_err(HandlerError::from)?;
    Ok((
        [(header::CACHE_CONTROL, "public, max-age=3600")],
        Json(info),
    ))
}

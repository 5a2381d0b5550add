use axum::{routing::get, Router};
use std::sync::Arc;

use crate::handler::content_handler::{
    contact_info_handler, list_projects_handler, list_services_handler,
};
use crate::service::content_service::ContentServiceImpl;

pub fn content_router(service: Arc<ContentServiceImpl>) -> Router {
    Router::new()
        .route("/services", get(list_services_handler))
        .route("/projects", get(list_projects_handler))
        .route("/contact-info", get(contact_info_handler))
        .with_state(service)
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

#[derive(Debug, Serialize)]
pub enum HandlerErrorKind {
    NotFound,
    Validation,
    BadRequest,
    ServiceUnavailable,
    Internal,
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::NotFound => "NotFound",
            HandlerErrorKind::Validation => "Validation",
            HandlerErrorKind::BadRequest => "BadRequest",
            HandlerErrorKind::ServiceUnavailable => "ServiceUnavailable",
            HandlerErrorKind::Internal => "Internal",
        };
        write!(f, "{}", s)
    }
}

/// Error body returned by handlers. `details` carries field-scoped validation
/// errors as a JSON map so the client can highlight the offending fields.
#[derive(Debug, Serialize)]
pub struct HandlerError {
    pub error: HandlerErrorKind,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for HandlerError {}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = match self.error {
            HandlerErrorKind::NotFound => StatusCode::NOT_FOUND,
            HandlerErrorKind::Validation | HandlerErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            HandlerErrorKind::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            HandlerErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = axum::Json(self);
        (status, body).into_response()
    }
}

#[derive(Debug, Clone)]
pub enum ServiceError {
    NotFound(String),
    /// Rejected before any persistence attempt; carries the per-field errors.
    Validation(ValidationErrors),
    /// The backing store is unreachable. Retryable by user action only.
    Unavailable(String),
    InternalError(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ServiceError::Validation(errors) => {
                let mut fields: Vec<String> = errors
                    .field_errors()
                    .keys()
                    .map(|k| k.to_string())
                    .collect();
                fields.sort();
                write!(f, "Validation failed for fields: {}", fields.join(", "))
            }
            ServiceError::Unavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
            ServiceError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

// Allow conversion from RepositoryError to ServiceError
impl From<crate::repository::repository_error::RepositoryError> for ServiceError {
    fn from(err: crate::repository::repository_error::RepositoryError) -> Self {
        use crate::repository::repository_error::RepositoryError;
        match err {
            RepositoryError::NotFound(msg) => ServiceError::NotFound(msg),
            RepositoryError::Unavailable(msg) => ServiceError::Unavailable(msg),
            RepositoryError::Generic(e) => ServiceError::InternalError(e.to_string()),
        }
    }
}

impl From<ServiceError> for HandlerError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => HandlerError {
                error: HandlerErrorKind::NotFound,
                message: msg,
                details: None,
            },
            ServiceError::Validation(errors) => HandlerError {
                error: HandlerErrorKind::Validation,
                message: format!("{}", ServiceError::Validation(errors.clone())),
                details: serde_json::to_value(&errors).ok(),
            },
            ServiceError::Unavailable(msg) => HandlerError {
                error: HandlerErrorKind::ServiceUnavailable,
                message: msg,
                details: None,
            },
            ServiceError::InternalError(msg) => HandlerError {
                error: HandlerErrorKind::Internal,
                message: msg,
                details: None,
            },
        }
    }
}

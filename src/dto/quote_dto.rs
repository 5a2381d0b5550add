use crate::model::quote::NewQuoteRequest;
use serde::{Deserialize, Serialize};

use validator::Validate;

/// Body of `POST /api/quote`. Required fields default to empty strings when
/// absent so that a missing field surfaces as a field-scoped validation error
/// rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQuoteRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "service_type is required"))]
    pub service_type: String,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    pub message: Option<String>,
}

impl CreateQuoteRequest {
    pub fn into_new(self) -> NewQuoteRequest {
        NewQuoteRequest {
            name: self.name,
            email: self.email,
            phone: self.phone,
            service_type: self.service_type,
            address: self.address,
            message: self.message,
        }
    }
}

/// Liveness card served at `GET /api/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiStatus {
    pub message: String,
    pub status: String,
}

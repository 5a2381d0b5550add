use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted quote request. The id and creation timestamp are assigned by
/// the repository at persistence time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub address: Option<String>,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated quote fields ready for persistence, before an id exists.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub address: Option<String>,
    pub message: Option<String>,
}

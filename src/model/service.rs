use serde::{Deserialize, Serialize};

/// A roofing offering displayed on the public site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub features: Vec<String>,
}

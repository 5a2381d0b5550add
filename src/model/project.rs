use serde::{Deserialize, Serialize};

/// A portfolio entry showcasing completed work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub image_url: String,
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Catalog entry shown on the gallery pages. Read-only through the public API;
/// items are seeded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioItem {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub image_url: String,
    pub is_video: bool,
    pub video_url: Option<String>,
    pub featured: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewPortfolioItem {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub image_url: String,
    pub is_video: bool,
    pub video_url: Option<String>,
    pub featured: bool,
}

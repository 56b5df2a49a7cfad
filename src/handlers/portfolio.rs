use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::models::PortfolioItem;
use crate::state::AppState;

// GET /api/portfolio?category=&featured=
#[derive(Deserialize)]
pub struct PortfolioQuery {
    pub category: Option<String>,
    pub featured: Option<bool>,
}

pub async fn list_portfolio(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PortfolioQuery>,
) -> Json<Vec<PortfolioItem>> {
    // Category filter wins over featured, matching the public site.
    let items = match (query.category.as_deref(), query.featured) {
        (Some(category), _) => state.store.portfolio_by_category(category),
        (None, Some(true)) => state.store.featured_portfolio(),
        _ => state.store.all_portfolio(),
    };
    Json(items)
}

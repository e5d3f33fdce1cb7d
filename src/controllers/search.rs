use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::{
    error::AppError, extract::Filters, models::SearchHit, query::catalog::SearchFilters, AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/search", get(search_events))
}

/// GET /api/search?date&location&category
///
/// Отдельный от `/api/events` контракт: точная дата вместо диапазона и узкая проекция.
async fn search_events(
    State(state): State<Arc<AppState>>,
    Filters(filters): Filters<SearchFilters>,
) -> Result<Json<Vec<SearchHit>>, AppError> {
    let hits = state.catalog.search_events(&filters).await?;
    Ok(Json(hits))
}

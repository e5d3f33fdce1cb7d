use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::{error::AppError, models::HomeSummary, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/home", get(home_summary))
}

// GET /api/home
async fn home_summary(State(state): State<Arc<AppState>>) -> Result<Json<HomeSummary>, AppError> {
    let summary = state.catalog.home_summary().await?;
    tracing::debug!(
        upcoming = summary.upcoming.len(),
        popular = summary.popular.len(),
        "home summary"
    );
    Ok(Json(summary))
}

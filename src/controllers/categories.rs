use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::{error::AppError, models::Category, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/categories", get(list_categories))
}

// GET /api/categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Category>>, AppError> {
    Ok(Json(Category::list_all(&state.db).await?))
}

use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::{error::AppError, models::Organization, AppState};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/organizations", get(list_organizations))
}

// GET /api/organizations
async fn list_organizations(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Organization>>, AppError> {
    Ok(Json(Organization::list_all(&state.db).await?))
}

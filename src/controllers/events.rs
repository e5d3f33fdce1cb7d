use axum::{extract::State, routing::get, Json, Router};
use std::sync::Arc;

use crate::{
    error::AppError,
    extract::{Filters, PathParam},
    models::{EventDetail, EventSummary},
    query::catalog::EventFilters,
    AppState,
};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/upcoming", get(upcoming_events))
        .route("/events/past", get(past_events))
        .route("/events/{id}", get(get_event))
}

// GET /api/events/upcoming
async fn upcoming_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EventSummary>>, AppError> {
    Ok(Json(state.catalog.upcoming_events().await?))
}

// GET /api/events/past
async fn past_events(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EventSummary>>, AppError> {
    Ok(Json(state.catalog.past_events().await?))
}

/// GET /api/events?category&location&start_date&end_date&q
///
/// Все переданные фильтры объединяются через AND.
async fn list_events(
    State(state): State<Arc<AppState>>,
    Filters(filters): Filters<EventFilters>,
) -> Result<Json<Vec<EventSummary>>, AppError> {
    Ok(Json(state.catalog.filter_events(&filters).await?))
}

/// GET /api/events/{id}
///
/// Нечисловой id не может совпасть ни с одной строкой, поэтому сразу 404.
async fn get_event(
    State(state): State<Arc<AppState>>,
    PathParam(id): PathParam<String>,
) -> Result<Json<EventDetail>, AppError> {
    let id: i64 = id.parse().map_err(|_| AppError::EventNotFound)?;

    match state.catalog.event_detail(id).await? {
        Some(detail) => Ok(Json(detail)),
        None => {
            tracing::debug!("event {} not found", id);
            Err(AppError::EventNotFound)
        }
    }
}

pub mod catalog;
pub mod config;
pub mod controllers;
pub mod database;
pub mod error;
pub mod extract;
pub mod frontend;
pub mod models;
pub mod query;

use axum::Router;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

// Shared state для всего приложения
#[derive(Clone)]
pub struct AppState {
    pub db: database::Database,
    pub catalog: catalog::CatalogStore,
    pub config: config::Config,
}

impl AppState {
    pub fn new(db: database::Database, config: config::Config) -> Arc<Self> {
        let catalog = catalog::CatalogStore::new(db.pool.clone());
        Arc::new(Self {
            db,
            catalog,
            config,
        })
    }
}

/// Собирает HTTP-приложение: API под `/api`, остальное - статика и SPA fallback.
pub fn app(state: Arc<AppState>) -> Router {
    let static_dir = state.config.app.static_dir.clone();

    Router::new()
        .nest("/api", controllers::routes())
        .with_state(state)
        .fallback_service(frontend::service(&static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

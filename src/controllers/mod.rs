pub mod categories;
pub mod events;
pub mod home;
pub mod organizations;
pub mod search;

use axum::Router;
use std::sync::Arc;

pub fn routes() -> Router<Arc<crate::AppState>> {
    Router::new()
        .merge(categories::routes())
        .merge(organizations::routes())
        .merge(events::routes())
        .merge(search::routes())
        .merge(home::routes())
}

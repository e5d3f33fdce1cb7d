//! Раздача статики фронтенда и SPA fallback.
//!
//! Существующие файлы отдает `ServeDir`. Если файла нет, только GET-запрос вне `/api/` и без
//! расширения в пути получает `index.html`, чтобы маршрутизацией занимался клиент.

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Router,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tower_http::services::ServeDir;

pub fn service(static_dir: &Path) -> ServeDir<Router> {
    let index = Arc::new(static_dir.join("index.html"));
    let entry = Router::new().fallback(serve_entry).with_state(index);
    ServeDir::new(static_dir).fallback(entry)
}

async fn serve_entry(State(index): State<Arc<PathBuf>>, method: Method, uri: Uri) -> Response {
    if !is_spa_route(&method, uri.path()) {
        return StatusCode::NOT_FOUND.into_response();
    }

    match tokio::fs::read_to_string(index.as_path()).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::warn!("cannot read {}: {}", index.display(), e);
            StatusCode::NOT_FOUND.into_response()
        }
    }
}

pub fn is_spa_route(method: &Method, path: &str) -> bool {
    method == Method::GET
        && !path.starts_with("/api/")
        && Path::new(path).extension().is_none()
}

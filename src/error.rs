use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Ошибки обработчиков API. Детали ошибки хранилища пишутся в лог и не уходят клиенту.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("event not found")]
    EventNotFound,
    #[error("store query failed: {0}")]
    Store(#[from] sqlx::Error),
    /// Query string не разобрался (например, повторяющийся параметр).
    #[error("malformed query string: {0}")]
    Query(#[from] QueryRejection),
    /// Единственный path-параметр API - id события, поэтому отказ означает 404.
    #[error("malformed path parameter: {0}")]
    Path(#[from] PathRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::EventNotFound | AppError::Path(_) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": "Event not found" })),
            )
                .into_response(),
            AppError::Store(e) => {
                tracing::error!("store query failed: {:?}", e);
                server_error()
            }
            AppError::Query(e) => {
                tracing::warn!("rejected query string: {}", e.body_text());
                server_error()
            }
        }
    }
}

fn server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Server error" })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::catalog::SearchFilters;
    use axum::{body::to_bytes, extract::Query, http::Uri};

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_has_fixed_message() {
        let response = AppError::EventNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            json!({ "message": "Event not found" })
        );
    }

    #[tokio::test]
    async fn store_failure_hides_details() {
        let response = AppError::from(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Server error" }));
        assert!(!body.to_string().contains("pool"));
    }

    #[tokio::test]
    async fn duplicated_query_parameter_is_a_generic_server_error() {
        let uri: Uri = "/api/search?date=a&date=b".parse().unwrap();
        let rejection = Query::<SearchFilters>::try_from_uri(&uri).unwrap_err();

        let response = AppError::from(rejection).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, json!({ "error": "Server error" }));
        assert!(!body.to_string().contains("duplicate"));
    }
}

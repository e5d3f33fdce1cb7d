//! Экстракторы API, которые отказывают через `AppError` и отвечают JSON,
//! а не текстом отказа axum.

use axum::extract::FromRequestParts;

use crate::error::AppError;

/// `Query<T>`: неразборчивая query string дает общий 500.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Filters<T>(pub T);

/// `Path<T>`: неразборчивый path-параметр дает 404.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

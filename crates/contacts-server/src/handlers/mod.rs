//! HTTP handlers

pub mod health;
pub mod users;

pub use health::health;

use crate::error::ApiError;
use axum::http::StatusCode;

/// Known path, unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError {
        status: StatusCode::METHOD_NOT_ALLOWED,
        message: "Method not allowed".to_string(),
    }
}

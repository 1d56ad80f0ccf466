//! HTTP error responses

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use contacts_types::ContactsError;
use serde_json::json;

/// Error returned by handlers, rendered as `{"error": message}`
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl From<ContactsError> for ApiError {
    fn from(e: ContactsError) -> Self {
        match e {
            ContactsError::MissingFields => ApiError {
                status: StatusCode::BAD_REQUEST,
                message: e.to_string(),
            },
            ContactsError::InvalidBody(message) => ApiError {
                status: StatusCode::BAD_REQUEST,
                message,
            },
            ContactsError::UserNotFound(_) => ApiError {
                status: StatusCode::NOT_FOUND,
                message: "User not found".to_string(),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ContactsError::InvalidBody(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
        }));
        (self.status, body).into_response()
    }
}

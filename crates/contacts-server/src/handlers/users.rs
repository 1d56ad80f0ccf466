//! User handlers

use crate::error::ApiError;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use contacts_types::{ContactsError, NewUser, User, UserPatch};

pub async fn list(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.user_registry.list_users())
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(req) = body?;
    let user = state.user_registry.create_user(req)?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = state.user_registry.get_user(&id)?;
    Ok(Json(user))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UserPatch>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    // Unknown ids are reported before the body is looked at
    if !state.user_registry.exists(&id) {
        return Err(ContactsError::UserNotFound(id).into());
    }
    let Json(patch) = body?;
    let user = state.user_registry.update_user(&id, patch)?;
    Ok(Json(user))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.user_registry.delete_user(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

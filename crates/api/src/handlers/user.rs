//! Handlers for the `/users` resource.
//!
//! Users register with an externally issued UUID; `/by-uuid/{uuid}` is the
//! identity-resolution endpoint mapping that UUID to the internal record.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use uuid::Uuid;

use fittogether_core::error::CoreError;
use fittogether_core::types::DbId;
use fittogether_db::models::user::{CreateUser, UpdateUser, User};
use fittogether_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_non_empty;
use crate::state::AppState;

/// POST /api/v1/users
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    require_non_empty("name", &input.name)?;
    require_non_empty("username", &input.username)?;
    let user = UserRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/v1/users
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = UserRepo::list(&state.pool).await?;
    Ok(Json(users))
}

/// GET /api/v1/users/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("User", id)))?;
    Ok(Json(user))
}

/// GET /api/v1/users/by-uuid/{uuid}
///
/// Identity resolution: returns the user row (including the internal
/// numeric id) for an external UUID. Malformed UUIDs are rejected with 400
/// by the path extractor before this handler runs.
pub async fn get_by_uuid(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
) -> AppResult<Json<User>> {
    let user = UserRepo::find_by_uuid(&state.pool, uuid)
        .await?
        .ok_or(AppError::Core(CoreError::not_found_uuid("User", uuid)))?;
    Ok(Json(user))
}

/// PUT /api/v1/users/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    if let Some(name) = &input.name {
        require_non_empty("name", name)?;
    }
    if let Some(username) = &input.username {
        require_non_empty("username", username)?;
    }
    let user = UserRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("User", id)))?;
    Ok(Json(user))
}

/// DELETE /api/v1/users/{id}
///
/// Memberships and badge awards cascade with the user.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = UserRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("User", id)))
    }
}

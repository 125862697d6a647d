//! Handlers for the `/badges` resource and the user-badge awards.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use fittogether_core::error::CoreError;
use fittogether_core::types::DbId;
use fittogether_db::models::badge::{Badge, CreateBadge};
use fittogether_db::repositories::{BadgeRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::require_non_empty;
use crate::state::AppState;

/// POST /api/v1/badges
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBadge>,
) -> AppResult<(StatusCode, Json<Badge>)> {
    require_non_empty("name", &input.name)?;
    let badge = BadgeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(badge)))
}

/// GET /api/v1/badges
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Badge>>> {
    let badges = BadgeRepo::list(&state.pool).await?;
    Ok(Json(badges))
}

/// GET /api/v1/badges/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Badge>> {
    let badge = BadgeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Badge", id)))?;
    Ok(Json(badge))
}

/// DELETE /api/v1/badges/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = BadgeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Badge", id)))
    }
}

/// GET /api/v1/badges/user/{user_id}
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<Vec<Badge>>> {
    let badges = BadgeRepo::list_for_user(&state.pool, user_id).await?;
    Ok(Json(badges))
}

/// POST /api/v1/badges/user/{user_id}/{badge_id}
///
/// Award a badge. Both referenced rows are checked before the insert; a
/// duplicate award surfaces as 409 via the unique constraint.
pub async fn award(
    State(state): State<AppState>,
    Path((user_id, badge_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if UserRepo::find_by_id(&state.pool, user_id).await?.is_none() {
        return Err(AppError::Core(CoreError::not_found("User", user_id)));
    }
    if BadgeRepo::find_by_id(&state.pool, badge_id).await?.is_none() {
        return Err(AppError::Core(CoreError::not_found("Badge", badge_id)));
    }
    BadgeRepo::award(&state.pool, user_id, badge_id).await?;
    Ok(StatusCode::CREATED)
}

/// DELETE /api/v1/badges/user/{user_id}/{badge_id}
pub async fn revoke(
    State(state): State<AppState>,
    Path((user_id, badge_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let revoked = BadgeRepo::revoke(&state.pool, user_id, badge_id).await?;
    if revoked {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Badge award", badge_id)))
    }
}

//! Handlers for the `/tags` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use fittogether_core::error::CoreError;
use fittogether_core::types::DbId;
use fittogether_db::models::tag::{CreateTag, Tag};
use fittogether_db::repositories::TagRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_non_empty;
use crate::state::AppState;

/// POST /api/v1/tags
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTag>,
) -> AppResult<(StatusCode, Json<Tag>)> {
    require_non_empty("name", &input.name)?;
    let tag = TagRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(tag)))
}

/// GET /api/v1/tags
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Tag>>> {
    let tags = TagRepo::list(&state.pool).await?;
    Ok(Json(tags))
}

/// GET /api/v1/tags/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Tag>> {
    let tag = TagRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Tag", id)))?;
    Ok(Json(tag))
}

/// DELETE /api/v1/tags/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TagRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Tag", id)))
    }
}

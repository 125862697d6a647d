//! Handlers for the `/goals` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use fittogether_core::error::CoreError;
use fittogether_core::types::DbId;
use fittogether_db::models::goal::{CreateGoal, Goal};
use fittogether_db::repositories::GoalRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::require_non_empty;
use crate::state::AppState;

/// POST /api/v1/goals
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateGoal>,
) -> AppResult<(StatusCode, Json<Goal>)> {
    require_non_empty("name", &input.name)?;
    let goal = GoalRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

/// GET /api/v1/goals
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Goal>>> {
    let goals = GoalRepo::list(&state.pool).await?;
    Ok(Json(goals))
}

/// GET /api/v1/goals/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Goal>> {
    let goal = GoalRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Goal", id)))?;
    Ok(Json(goal))
}

/// DELETE /api/v1/goals/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = GoalRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Goal", id)))
    }
}

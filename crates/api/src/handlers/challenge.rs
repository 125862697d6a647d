//! Handlers for the `/challenges` resource, including the tag and goal
//! attachment sub-resources.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use fittogether_core::error::CoreError;
use fittogether_core::types::DbId;
use fittogether_db::models::challenge::{Challenge, CreateChallenge, UpdateChallenge};
use fittogether_db::models::goal::{Goal, SetChallengeGoals};
use fittogether_db::models::tag::{SetChallengeTags, Tag};
use fittogether_db::repositories::{ChallengeRepo, GoalRepo, TagRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::require_non_empty;
use crate::state::AppState;

/// POST /api/v1/challenges
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateChallenge>,
) -> AppResult<(StatusCode, Json<Challenge>)> {
    require_non_empty("name", &input.name)?;
    let challenge = ChallengeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(challenge)))
}

/// GET /api/v1/challenges
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Challenge>>> {
    let challenges = ChallengeRepo::list(&state.pool).await?;
    Ok(Json(challenges))
}

/// GET /api/v1/challenges/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Challenge>> {
    let challenge = ChallengeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Challenge", id)))?;
    Ok(Json(challenge))
}

/// PUT /api/v1/challenges/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateChallenge>,
) -> AppResult<Json<Challenge>> {
    if let Some(name) = &input.name {
        require_non_empty("name", name)?;
    }
    let challenge = ChallengeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Challenge", id)))?;
    Ok(Json(challenge))
}

/// DELETE /api/v1/challenges/{id}
///
/// Memberships and tag/goal links cascade with the challenge.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ChallengeRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Challenge", id)))
    }
}

/// GET /api/v1/challenges/{id}/tags
pub async fn list_tags(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Tag>>> {
    ensure_challenge_exists(&state, id).await?;
    let tags = TagRepo::list_for_challenge(&state.pool, id).await?;
    Ok(Json(tags))
}

/// PUT /api/v1/challenges/{id}/tags
///
/// Replaces the challenge's tag set with the given ids.
pub async fn set_tags(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetChallengeTags>,
) -> AppResult<Json<Vec<Tag>>> {
    ensure_challenge_exists(&state, id).await?;
    TagRepo::set_for_challenge(&state.pool, id, &input.tag_ids).await?;
    let tags = TagRepo::list_for_challenge(&state.pool, id).await?;
    Ok(Json(tags))
}

/// GET /api/v1/challenges/{id}/goals
pub async fn list_goals(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vec<Goal>>> {
    ensure_challenge_exists(&state, id).await?;
    let goals = GoalRepo::list_for_challenge(&state.pool, id).await?;
    Ok(Json(goals))
}

/// PUT /api/v1/challenges/{id}/goals
///
/// Replaces the challenge's goal set with the given ids.
pub async fn set_goals(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetChallengeGoals>,
) -> AppResult<Json<Vec<Goal>>> {
    ensure_challenge_exists(&state, id).await?;
    GoalRepo::set_for_challenge(&state.pool, id, &input.goal_ids).await?;
    let goals = GoalRepo::list_for_challenge(&state.pool, id).await?;
    Ok(Json(goals))
}

async fn ensure_challenge_exists(state: &AppState, id: DbId) -> AppResult<()> {
    if ChallengeRepo::exists(&state.pool, id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::not_found("Challenge", id)))
    }
}

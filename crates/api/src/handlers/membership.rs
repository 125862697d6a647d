//! Handlers for the `/memberships` resource: join, leave, the two flag
//! toggles, and the read-only views (my challenges, favorites, joined
//! check, wall of fame).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use fittogether_core::error::CoreError;
use fittogether_core::types::DbId;
use fittogether_db::models::membership::{
    JoinChallenge, Membership, MembershipWithChallenge, SetCompleted, SetFavorite, WallOfFameEntry,
};
use fittogether_db::repositories::{ChallengeRepo, MembershipRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Response body for the joined-state check.
#[derive(Debug, Serialize)]
pub struct JoinedResponse {
    pub joined: bool,
}

/// POST /api/v1/memberships
///
/// Join a challenge. Resolves the user by external UUID and verifies the
/// challenge exists before inserting (the store does not cascade-validate
/// references). A duplicate pair surfaces as 409 via the unique constraint,
/// which also closes the race between two concurrent joins.
pub async fn join(
    State(state): State<AppState>,
    Json(input): Json<JoinChallenge>,
) -> AppResult<(StatusCode, Json<Membership>)> {
    let user = UserRepo::find_by_uuid(&state.pool, input.user_uuid)
        .await?
        .ok_or(AppError::Core(CoreError::not_found_uuid(
            "User",
            input.user_uuid,
        )))?;

    if !ChallengeRepo::exists(&state.pool, input.challenge_id).await? {
        return Err(AppError::Core(CoreError::not_found(
            "Challenge",
            input.challenge_id,
        )));
    }

    let membership =
        MembershipRepo::create(&state.pool, user.id, user.uuid, input.challenge_id).await?;
    Ok((StatusCode::CREATED, Json(membership)))
}

/// DELETE /api/v1/memberships/{id}
///
/// Leave a challenge. No cascading side effects on the user or challenge.
pub async fn leave(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = MembershipRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::not_found("Membership", id)))
    }
}

/// PATCH /api/v1/memberships/{id}/favorite
///
/// Sets the `favorite` flag and returns the updated row for immediate UI
/// reflection. `completed` is untouched; repeating a value is a no-op.
pub async fn set_favorite(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetFavorite>,
) -> AppResult<Json<Membership>> {
    let membership = MembershipRepo::set_favorite(&state.pool, id, input.favorite)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Membership", id)))?;
    Ok(Json(membership))
}

/// PATCH /api/v1/memberships/{id}/completed
///
/// Same contract as [`set_favorite`] but for the `completed` flag.
pub async fn set_completed(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<SetCompleted>,
) -> AppResult<Json<Membership>> {
    let membership = MembershipRepo::set_completed(&state.pool, id, input.completed)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Membership", id)))?;
    Ok(Json(membership))
}

/// GET /api/v1/memberships/user/{uuid}
///
/// "My challenges": the user's memberships joined with their challenges,
/// ordered by membership id. An unknown or member-less UUID yields an
/// empty list, not an error.
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
) -> AppResult<Json<Vec<MembershipWithChallenge>>> {
    let memberships = MembershipRepo::list_for_user(&state.pool, uuid).await?;
    Ok(Json(memberships))
}

/// GET /api/v1/memberships/user/{uuid}/favorites
pub async fn list_favorites(
    State(state): State<AppState>,
    Path(uuid): Path<Uuid>,
) -> AppResult<Json<Vec<MembershipWithChallenge>>> {
    let memberships = MembershipRepo::list_favorites(&state.pool, uuid).await?;
    Ok(Json(memberships))
}

/// GET /api/v1/memberships/user/{uuid}/joined/{challenge_id}
pub async fn is_joined(
    State(state): State<AppState>,
    Path((uuid, challenge_id)): Path<(Uuid, DbId)>,
) -> AppResult<Json<JoinedResponse>> {
    let joined = MembershipRepo::is_joined(&state.pool, uuid, challenge_id).await?;
    Ok(Json(JoinedResponse { joined }))
}

/// GET /api/v1/memberships/wall-of-fame
///
/// Every completed membership with user and challenge names.
pub async fn wall_of_fame(State(state): State<AppState>) -> AppResult<Json<Vec<WallOfFameEntry>>> {
    let entries = MembershipRepo::wall_of_fame(&state.pool).await?;
    Ok(Json(entries))
}

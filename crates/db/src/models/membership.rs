//! Membership entity model and DTOs.
//!
//! A membership is the join record between a user and a challenge. It
//! carries the two independent state flags (`completed`, `favorite`) and
//! stores the user's external UUID redundantly next to the numeric id.

use fittogether_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::challenge::Difficulty;

/// A membership row from the `memberships` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Membership {
    pub id: DbId,
    pub user_id: DbId,
    pub user_uuid: Uuid,
    pub challenge_id: DbId,
    pub completed: bool,
    pub favorite: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for joining a challenge. The user is addressed by external UUID,
/// the challenge by numeric id.
#[derive(Debug, Clone, Deserialize)]
pub struct JoinChallenge {
    pub user_uuid: Uuid,
    pub challenge_id: DbId,
}

/// DTO for flipping the `favorite` flag.
#[derive(Debug, Clone, Deserialize)]
pub struct SetFavorite {
    pub favorite: bool,
}

/// DTO for flipping the `completed` flag.
#[derive(Debug, Clone, Deserialize)]
pub struct SetCompleted {
    pub completed: bool,
}

/// A membership joined with its challenge, for the "my challenges" and
/// "favorites" views.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MembershipWithChallenge {
    pub id: DbId,
    pub user_id: DbId,
    pub user_uuid: Uuid,
    pub challenge_id: DbId,
    pub completed: bool,
    pub favorite: bool,
    pub challenge_name: String,
    pub challenge_description: String,
    pub difficulty: Difficulty,
}

/// A wall-of-fame row: a completed membership joined with the user and
/// challenge names for display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WallOfFameEntry {
    pub membership_id: DbId,
    pub user_id: DbId,
    pub user_name: String,
    pub user_uuid: Uuid,
    pub challenge_id: DbId,
    pub challenge_name: String,
}

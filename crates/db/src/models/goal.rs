//! Goal entity model and DTOs.

use fittogether_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A goal row from the `goals` table. Goals label challenges the same way
/// tags do, but are surfaced separately in search.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Goal {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new goal.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateGoal {
    pub name: String,
}

/// DTO for replacing the goal set of a challenge.
#[derive(Debug, Clone, Deserialize)]
pub struct SetChallengeGoals {
    pub goal_ids: Vec<DbId>,
}

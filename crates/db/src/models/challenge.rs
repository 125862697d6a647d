//! Challenge entity model and DTOs.

use fittogether_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Challenge difficulty, backed by the `difficulty` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "difficulty", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// A challenge row from the `challenges` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Challenge {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new challenge.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChallenge {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Defaults to `easy` if omitted.
    pub difficulty: Option<Difficulty>,
}

/// DTO for updating an existing challenge. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateChallenge {
    pub name: Option<String>,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
}

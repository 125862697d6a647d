//! Tag entity model and DTOs.

use fittogether_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A tag row from the `tags` table. Tags label challenges for filtering.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new tag.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTag {
    pub name: String,
}

/// DTO for replacing the tag set of a challenge.
#[derive(Debug, Clone, Deserialize)]
pub struct SetChallengeTags {
    pub tag_ids: Vec<DbId>,
}

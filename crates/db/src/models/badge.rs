//! Badge entity model and DTOs.

use fittogether_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A badge row from the `badges` table. Badges are awarded to users for
/// gamification display.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Badge {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub created_at: Timestamp,
}

/// DTO for creating a new badge.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateBadge {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

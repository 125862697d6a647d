//! Repository for the `badges` and `user_badges` tables.

use sqlx::PgPool;

use fittogether_core::types::DbId;

use crate::models::badge::{Badge, CreateBadge};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, created_at";

/// Provides CRUD operations for badges and the user-badge link table.
pub struct BadgeRepo;

impl BadgeRepo {
    /// Insert a new badge, returning the created row. Names are unique.
    pub async fn create(pool: &PgPool, input: &CreateBadge) -> Result<Badge, sqlx::Error> {
        let query =
            format!("INSERT INTO badges (name, description) VALUES ($1, $2) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Badge>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a badge by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Badge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM badges WHERE id = $1");
        sqlx::query_as::<_, Badge>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all badges ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Badge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM badges ORDER BY name");
        sqlx::query_as::<_, Badge>(&query).fetch_all(pool).await
    }

    /// Delete a badge by ID. Awards cascade. Returns `true` if a row was
    /// removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM badges WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the badges awarded to a user, most recent award first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Badge>, sqlx::Error> {
        sqlx::query_as::<_, Badge>(
            "SELECT b.id, b.name, b.description, b.created_at
             FROM badges b
             JOIN user_badges ub ON ub.badge_id = b.id
             WHERE ub.user_id = $1
             ORDER BY ub.awarded_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Award a badge to a user. A duplicate award fails on the unique
    /// constraint.
    pub async fn award(pool: &PgPool, user_id: DbId, badge_id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO user_badges (user_id, badge_id) VALUES ($1, $2)")
            .bind(user_id)
            .bind(badge_id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Revoke a badge from a user. Returns `true` if an award was removed.
    pub async fn revoke(pool: &PgPool, user_id: DbId, badge_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_badges WHERE user_id = $1 AND badge_id = $2")
            .bind(user_id)
            .bind(badge_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

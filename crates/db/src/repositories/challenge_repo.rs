//! Repository for the `challenges` table.

use sqlx::PgPool;

use fittogether_core::types::DbId;

use crate::models::challenge::{Challenge, CreateChallenge, UpdateChallenge};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, difficulty, created_at, updated_at";

/// Provides CRUD operations for challenges.
pub struct ChallengeRepo;

impl ChallengeRepo {
    /// Insert a new challenge, returning the created row.
    ///
    /// If `difficulty` is `None` in the input, defaults to `easy`.
    pub async fn create(pool: &PgPool, input: &CreateChallenge) -> Result<Challenge, sqlx::Error> {
        let query = format!(
            "INSERT INTO challenges (name, description, difficulty)
             VALUES ($1, $2, COALESCE($3, 'easy'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Challenge>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.difficulty)
            .fetch_one(pool)
            .await
    }

    /// Find a challenge by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Challenge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM challenges WHERE id = $1");
        sqlx::query_as::<_, Challenge>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a challenge with the given ID exists. Used for the explicit
    /// look-up-before-insert check when creating memberships.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM challenges WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// List all challenges ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Challenge>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM challenges ORDER BY id");
        sqlx::query_as::<_, Challenge>(&query).fetch_all(pool).await
    }

    /// Update a challenge. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateChallenge,
    ) -> Result<Option<Challenge>, sqlx::Error> {
        let query = format!(
            "UPDATE challenges SET
                name = COALESCE($2, name),
                description = COALESCE($3, description),
                difficulty = COALESCE($4, difficulty),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Challenge>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.difficulty)
            .fetch_optional(pool)
            .await
    }

    /// Delete a challenge by ID. Memberships and tag/goal links cascade at
    /// the database level. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM challenges WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

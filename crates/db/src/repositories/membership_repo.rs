//! Repository for the `memberships` table.
//!
//! The only code that mutates membership rows. The `(user_id, challenge_id)`
//! pair is guarded by the `uq_memberships_user_challenge` constraint, so a
//! racing duplicate insert surfaces as a unique violation rather than a
//! second row.

use sqlx::PgPool;
use uuid::Uuid;

use fittogether_core::types::DbId;

use crate::models::membership::{
    Membership, MembershipWithChallenge, WallOfFameEntry,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, user_id, user_uuid, challenge_id, completed, favorite, created_at, updated_at";

/// Columns for the membership-with-challenge projection.
const JOINED_COLUMNS: &str = "m.id, m.user_id, m.user_uuid, m.challenge_id, m.completed, \
     m.favorite, c.name AS challenge_name, c.description AS challenge_description, c.difficulty";

/// Provides CRUD operations and read projections for memberships.
pub struct MembershipRepo;

impl MembershipRepo {
    /// Insert a new membership with both flags false, returning the created
    /// row. Callers resolve the user and verify the challenge exists first;
    /// a duplicate `(user_id, challenge_id)` pair fails on the unique
    /// constraint.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        user_uuid: Uuid,
        challenge_id: DbId,
    ) -> Result<Membership, sqlx::Error> {
        let query = format!(
            "INSERT INTO memberships (user_id, user_uuid, challenge_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Membership>(&query)
            .bind(user_id)
            .bind(user_uuid)
            .bind(challenge_id)
            .fetch_one(pool)
            .await
    }

    /// Find a membership by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Membership>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM memberships WHERE id = $1");
        sqlx::query_as::<_, Membership>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a membership by ID. No cascading side effects on the user or
    /// challenge. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM memberships WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Set the `favorite` flag, leaving `completed` untouched. Repeating the
    /// same value is a no-op beyond the returned row.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_favorite(
        pool: &PgPool,
        id: DbId,
        value: bool,
    ) -> Result<Option<Membership>, sqlx::Error> {
        let query = format!(
            "UPDATE memberships SET favorite = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Membership>(&query)
            .bind(id)
            .bind(value)
            .fetch_optional(pool)
            .await
    }

    /// Set the `completed` flag, leaving `favorite` untouched. Same contract
    /// as [`MembershipRepo::set_favorite`].
    pub async fn set_completed(
        pool: &PgPool,
        id: DbId,
        value: bool,
    ) -> Result<Option<Membership>, sqlx::Error> {
        let query = format!(
            "UPDATE memberships SET completed = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Membership>(&query)
            .bind(id)
            .bind(value)
            .fetch_optional(pool)
            .await
    }

    /// List a user's memberships joined with their challenges, ordered by
    /// membership ID ascending for deterministic display. A user with no
    /// memberships yields an empty vec.
    pub async fn list_for_user(
        pool: &PgPool,
        user_uuid: Uuid,
    ) -> Result<Vec<MembershipWithChallenge>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM memberships m
             JOIN challenges c ON c.id = m.challenge_id
             WHERE m.user_uuid = $1
             ORDER BY m.id"
        );
        sqlx::query_as::<_, MembershipWithChallenge>(&query)
            .bind(user_uuid)
            .fetch_all(pool)
            .await
    }

    /// Subset of [`MembershipRepo::list_for_user`] filtered to favorites.
    pub async fn list_favorites(
        pool: &PgPool,
        user_uuid: Uuid,
    ) -> Result<Vec<MembershipWithChallenge>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM memberships m
             JOIN challenges c ON c.id = m.challenge_id
             WHERE m.user_uuid = $1 AND m.favorite
             ORDER BY m.id"
        );
        sqlx::query_as::<_, MembershipWithChallenge>(&query)
            .bind(user_uuid)
            .fetch_all(pool)
            .await
    }

    /// The wall of fame: every completed membership joined with the user
    /// and challenge names.
    pub async fn wall_of_fame(pool: &PgPool) -> Result<Vec<WallOfFameEntry>, sqlx::Error> {
        sqlx::query_as::<_, WallOfFameEntry>(
            "SELECT m.id AS membership_id, u.id AS user_id, u.name AS user_name,
                    m.user_uuid, c.id AS challenge_id, c.name AS challenge_name
             FROM memberships m
             JOIN users u ON u.id = m.user_id
             JOIN challenges c ON c.id = m.challenge_id
             WHERE m.completed
             ORDER BY m.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Whether the user has joined the given challenge. Drives the
    /// Join vs. Joined rendering on the all-challenges view.
    pub async fn is_joined(
        pool: &PgPool,
        user_uuid: Uuid,
        challenge_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM memberships WHERE user_uuid = $1 AND challenge_id = $2
             )",
        )
        .bind(user_uuid)
        .bind(challenge_id)
        .fetch_one(pool)
        .await?;
        Ok(row.0)
    }
}

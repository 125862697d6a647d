//! Repository for the `goals` and `challenge_goals` tables.

use sqlx::PgPool;

use fittogether_core::types::DbId;

use crate::models::goal::{CreateGoal, Goal};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for goals and the challenge-goal link table.
pub struct GoalRepo;

impl GoalRepo {
    /// Insert a new goal, returning the created row. Names are unique.
    pub async fn create(pool: &PgPool, input: &CreateGoal) -> Result<Goal, sqlx::Error> {
        let query = format!("INSERT INTO goals (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Goal>(&query)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a goal by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals WHERE id = $1");
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all goals ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals ORDER BY name");
        sqlx::query_as::<_, Goal>(&query).fetch_all(pool).await
    }

    /// Delete a goal by ID. Challenge links cascade. Returns `true` if a row
    /// was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List the goals attached to a challenge, ordered by name.
    pub async fn list_for_challenge(
        pool: &PgPool,
        challenge_id: DbId,
    ) -> Result<Vec<Goal>, sqlx::Error> {
        sqlx::query_as::<_, Goal>(
            "SELECT g.id, g.name, g.created_at
             FROM goals g
             JOIN challenge_goals cg ON cg.goal_id = g.id
             WHERE cg.challenge_id = $1
             ORDER BY g.name",
        )
        .bind(challenge_id)
        .fetch_all(pool)
        .await
    }

    /// Replace the goal set of a challenge in a single transaction.
    pub async fn set_for_challenge(
        pool: &PgPool,
        challenge_id: DbId,
        goal_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;
        sqlx::query("DELETE FROM challenge_goals WHERE challenge_id = $1")
            .bind(challenge_id)
            .execute(&mut *tx)
            .await?;
        for goal_id in goal_ids {
            sqlx::query("INSERT INTO challenge_goals (challenge_id, goal_id) VALUES ($1, $2)")
                .bind(challenge_id)
                .bind(goal_id)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await
    }
}

//! Workout plan repository
//!
//! Days and exercises are stored as one JSONB document per plan. Every
//! query is scoped by owner, so another user's plan reads as missing.

use anyhow::Result;
use chrono::{DateTime, Utc};
use fitness_tracker_shared::WorkoutDay;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

/// Workout plan record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct WorkoutPlanRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub days: Json<Vec<WorkoutDay>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating or replacing a plan
#[derive(Debug, Clone)]
pub struct WorkoutPlanInput {
    pub name: String,
    pub description: Option<String>,
    pub days: Vec<WorkoutDay>,
}

/// Workout plan repository for database operations
pub struct WorkoutPlanRepository;

impl WorkoutPlanRepository {
    pub async fn create(
        pool: &PgPool,
        user_id: Uuid,
        input: WorkoutPlanInput,
    ) -> Result<WorkoutPlanRecord> {
        let record = sqlx::query_as::<_, WorkoutPlanRecord>(
            r#"
            INSERT INTO workout_plans (user_id, name, description, days)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, name, description, days, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(Json(&input.days))
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Plans owned by the user, newest first
    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<WorkoutPlanRecord>> {
        let records = sqlx::query_as::<_, WorkoutPlanRecord>(
            r#"
            SELECT id, user_id, name, description, days, created_at, updated_at
            FROM workout_plans
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    pub async fn find_for_user(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
    ) -> Result<Option<WorkoutPlanRecord>> {
        let record = sqlx::query_as::<_, WorkoutPlanRecord>(
            r#"
            SELECT id, user_id, name, description, days, created_at, updated_at
            FROM workout_plans
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Full replacement of name, description and days
    pub async fn replace(
        pool: &PgPool,
        user_id: Uuid,
        id: Uuid,
        input: WorkoutPlanInput,
    ) -> Result<Option<WorkoutPlanRecord>> {
        let record = sqlx::query_as::<_, WorkoutPlanRecord>(
            r#"
            UPDATE workout_plans SET
                name = $3,
                description = $4,
                days = $5,
                updated_at = NOW()
            WHERE id = $1 AND user_id = $2
            RETURNING id, user_id, name, description, days, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(user_id)
        .bind(&input.name)
        .bind(&input.description)
        .bind(Json(&input.days))
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Returns whether a plan was deleted
    pub async fn delete(pool: &PgPool, user_id: Uuid, id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM workout_plans
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

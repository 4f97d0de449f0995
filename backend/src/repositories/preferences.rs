//! Preferences repository
//!
//! One row per user, created alongside the account. Enum-like columns are
//! stored as their snake_case names.

use anyhow::Result;
use chrono::{DateTime, Utc};
use fitness_tracker_shared::NutritionTargets;
use sqlx::PgPool;
use uuid::Uuid;

/// Preferences joined with the owning account's name and email
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PreferencesRecord {
    pub user_id: Uuid,
    pub name: String,
    pub email: String,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<i32>,
    pub gender: String,
    pub activity_level: String,
    pub diet_type: String,
    pub fitness_goals: Vec<String>,
    pub daily_calorie_needs: i32,
    pub daily_protein_needs: i32,
    pub daily_carbs_needs: i32,
    pub daily_fats_needs: i32,
    pub updated_at: DateTime<Utc>,
}

/// Partial preferences update; `None` keeps the stored value
#[derive(Debug, Clone, Default)]
pub struct UpdatePreferences {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
    pub age_years: Option<i32>,
    pub gender: Option<String>,
    pub activity_level: Option<String>,
    pub diet_type: Option<String>,
    pub fitness_goals: Option<Vec<String>>,
}

const SELECT_PREFERENCES: &str = r#"
    SELECT p.user_id, u.name, u.email, p.weight_kg, p.height_cm, p.age_years,
           p.gender, p.activity_level, p.diet_type, p.fitness_goals,
           p.daily_calorie_needs, p.daily_protein_needs, p.daily_carbs_needs,
           p.daily_fats_needs, p.updated_at
    FROM user_preferences p
    JOIN users u ON u.id = p.user_id
    WHERE p.user_id = $1
"#;

/// Preferences repository for database operations
pub struct PreferencesRepository;

impl PreferencesRepository {
    /// Get preferences for a user
    pub async fn get(pool: &PgPool, user_id: Uuid) -> Result<Option<PreferencesRecord>> {
        let record = sqlx::query_as::<_, PreferencesRecord>(SELECT_PREFERENCES)
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

        Ok(record)
    }

    /// Apply a partial update and store the targets derived from the
    /// resulting row, all in one transaction
    ///
    /// The first UPDATE holds the row lock until commit, so concurrent
    /// updates for the same user serialize and the stored targets always
    /// belong to the stored profile. `recompute` returning `None` leaves the
    /// targets untouched.
    pub async fn update_with_targets<F>(
        pool: &PgPool,
        user_id: Uuid,
        updates: UpdatePreferences,
        recompute: F,
    ) -> Result<Option<(PreferencesRecord, Option<NutritionTargets>)>>
    where
        F: FnOnce(&PreferencesRecord) -> Option<NutritionTargets>,
    {
        let mut tx = pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE user_preferences SET
                weight_kg = COALESCE($2, weight_kg),
                height_cm = COALESCE($3, height_cm),
                age_years = COALESCE($4, age_years),
                gender = COALESCE($5, gender),
                activity_level = COALESCE($6, activity_level),
                diet_type = COALESCE($7, diet_type),
                fitness_goals = COALESCE($8, fitness_goals),
                updated_at = NOW()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .bind(updates.weight_kg)
        .bind(updates.height_cm)
        .bind(updates.age_years)
        .bind(updates.gender)
        .bind(updates.activity_level)
        .bind(updates.diet_type)
        .bind(updates.fitness_goals)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Ok(None);
        }

        let record = sqlx::query_as::<_, PreferencesRecord>(SELECT_PREFERENCES)
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await?;

        let targets = recompute(&record);
        if let Some(targets) = &targets {
            sqlx::query(
                r#"
                UPDATE user_preferences SET
                    daily_calorie_needs = $2,
                    daily_protein_needs = $3,
                    daily_carbs_needs = $4,
                    daily_fats_needs = $5
                WHERE user_id = $1
                "#,
            )
            .bind(user_id)
            .bind(targets.daily_calories)
            .bind(targets.daily_protein_g)
            .bind(targets.daily_carbs_g)
            .bind(targets.daily_fats_g)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(Some((record, targets)))
    }
}

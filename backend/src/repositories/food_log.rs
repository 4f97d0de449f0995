//! Food log repository
//!
//! A food log is one row per user and day holding running totals; meals are
//! child rows. Logging a meal upserts the day and increments its totals in
//! the same transaction as the meal insert.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

/// Day log record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FoodLogRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub log_date: NaiveDate,
    pub total_calories: Decimal,
    pub total_protein: Decimal,
    pub total_carbs: Decimal,
    pub total_fats: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Meal record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FoodLogMealRecord {
    pub id: Uuid,
    pub food_log_id: Uuid,
    pub name: String,
    pub food_name: String,
    pub calories: Decimal,
    pub protein: Decimal,
    pub carbs: Decimal,
    pub fats: Decimal,
    pub meal_time: String,
    pub created_at: DateTime<Utc>,
}

/// Input for logging a meal
#[derive(Debug, Clone)]
pub struct CreateMeal {
    pub name: String,
    pub food_name: String,
    pub calories: Decimal,
    pub protein: Decimal,
    pub carbs: Decimal,
    pub fats: Decimal,
    pub meal_time: String,
}

/// A day log with its meals in insertion order
#[derive(Debug, Clone)]
pub struct FoodLogWithMeals {
    pub log: FoodLogRecord,
    pub meals: Vec<FoodLogMealRecord>,
}

/// Food log repository for database operations
pub struct FoodLogRepository;

impl FoodLogRepository {
    /// Append a meal to the user's log for `date`, creating the log if needed
    pub async fn add_meal(
        pool: &PgPool,
        user_id: Uuid,
        date: NaiveDate,
        meal: CreateMeal,
    ) -> Result<FoodLogWithMeals> {
        let mut tx = pool.begin().await?;

        let log = sqlx::query_as::<_, FoodLogRecord>(
            r#"
            INSERT INTO food_logs (user_id, log_date, total_calories, total_protein, total_carbs, total_fats)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id, log_date) DO UPDATE SET
                total_calories = food_logs.total_calories + EXCLUDED.total_calories,
                total_protein = food_logs.total_protein + EXCLUDED.total_protein,
                total_carbs = food_logs.total_carbs + EXCLUDED.total_carbs,
                total_fats = food_logs.total_fats + EXCLUDED.total_fats,
                updated_at = NOW()
            RETURNING id, user_id, log_date, total_calories, total_protein, total_carbs,
                      total_fats, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(date)
        .bind(meal.calories)
        .bind(meal.protein)
        .bind(meal.carbs)
        .bind(meal.fats)
        .fetch_one(&mut *tx)
        .await?;

        sqlx::query(
            r#"
            INSERT INTO food_log_meals (food_log_id, name, food_name, calories, protein, carbs, fats, meal_time)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(log.id)
        .bind(&meal.name)
        .bind(&meal.food_name)
        .bind(meal.calories)
        .bind(meal.protein)
        .bind(meal.carbs)
        .bind(meal.fats)
        .bind(&meal.meal_time)
        .execute(&mut *tx)
        .await?;

        let meals = sqlx::query_as::<_, FoodLogMealRecord>(
            r#"
            SELECT id, food_log_id, name, food_name, calories, protein, carbs, fats, meal_time, created_at
            FROM food_log_meals
            WHERE food_log_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(log.id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(FoodLogWithMeals { log, meals })
    }

    /// Day logs between `start` and `end` inclusive, ascending by date
    pub async fn list_in_range(
        pool: &PgPool,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<FoodLogWithMeals>> {
        let logs = sqlx::query_as::<_, FoodLogRecord>(
            r#"
            SELECT id, user_id, log_date, total_calories, total_protein, total_carbs,
                   total_fats, created_at, updated_at
            FROM food_logs
            WHERE user_id = $1 AND log_date >= $2 AND log_date <= $3
            ORDER BY log_date ASC
            "#,
        )
        .bind(user_id)
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await?;

        if logs.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = logs.iter().map(|log| log.id).collect();
        let meals = sqlx::query_as::<_, FoodLogMealRecord>(
            r#"
            SELECT id, food_log_id, name, food_name, calories, protein, carbs, fats, meal_time, created_at
            FROM food_log_meals
            WHERE food_log_id = ANY($1)
            ORDER BY created_at, id
            "#,
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut by_log: HashMap<Uuid, Vec<FoodLogMealRecord>> = HashMap::new();
        for meal in meals {
            by_log.entry(meal.food_log_id).or_default().push(meal);
        }

        Ok(logs
            .into_iter()
            .map(|log| {
                let meals = by_log.remove(&log.id).unwrap_or_default();
                FoodLogWithMeals { log, meals }
            })
            .collect())
    }
}

//! Food log service
//!
//! Dates are calendar days in UTC. Amounts are stored as NUMERIC with two
//! decimals and returned as floats.

use crate::error::ApiError;
use crate::repositories::{CreateMeal, FoodLogMealRecord, FoodLogRepository, FoodLogWithMeals};
use chrono::{DateTime, NaiveDate, Utc};
use fitness_tracker_shared::types::{
    FoodLogRangeQuery, FoodLogResponse, FoodLogsResponse, LogFoodRequest, LogFoodResponse,
    MealResponse,
};
use fitness_tracker_shared::validation::{
    check_field, validate_calories, validate_macro_grams, ValidationError,
};
use fitness_tracker_shared::{DailyTotals, Meal, MealTime};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

const CSV_HEADER: [&str; 8] = [
    "date", "meal_time", "name", "food_name", "calories", "protein", "carbs", "fats",
];

/// One CSV row per logged meal
#[derive(Debug, Serialize)]
struct MealCsvRow {
    date: NaiveDate,
    meal_time: String,
    name: String,
    food_name: String,
    calories: Decimal,
    protein: Decimal,
    carbs: Decimal,
    fats: Decimal,
}

/// Food log service
pub struct FoodLogService;

impl FoodLogService {
    /// Log a meal against a day, creating the day's log on first use
    pub async fn log_meal(
        db: &PgPool,
        user_id: Uuid,
        req: LogFoodRequest,
        today: NaiveDate,
    ) -> Result<LogFoodResponse, ApiError> {
        let date = parse_log_date(req.date.as_deref(), today)?;
        let meal = validate_meal(&req.meal)?;

        let log = FoodLogRepository::add_meal(db, user_id, date, meal)
            .await
            .map_err(ApiError::Internal)?;

        metrics::counter!("meals_logged_total").increment(1);
        debug!(%user_id, %date, meals = log.meals.len(), "Meal logged");

        Ok(LogFoodResponse {
            message: "Food logged successfully".to_string(),
            food_log: to_response(log),
        })
    }

    /// Day logs in the resolved range, ascending by date
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        query: &FoodLogRangeQuery,
        today: NaiveDate,
    ) -> Result<FoodLogsResponse, ApiError> {
        let logs = Self::fetch_range(db, user_id, query, today).await?;
        Ok(FoodLogsResponse {
            food_logs: logs.into_iter().map(to_response).collect(),
        })
    }

    /// CSV export of every meal in the resolved range
    pub async fn export_csv(
        db: &PgPool,
        user_id: Uuid,
        query: &FoodLogRangeQuery,
        today: NaiveDate,
    ) -> Result<String, ApiError> {
        let logs = Self::fetch_range(db, user_id, query, today).await?;
        meals_to_csv(&logs)
    }

    async fn fetch_range(
        db: &PgPool,
        user_id: Uuid,
        query: &FoodLogRangeQuery,
        today: NaiveDate,
    ) -> Result<Vec<FoodLogWithMeals>, ApiError> {
        let (start, end) = resolve_date_range(query.start_date, query.end_date, today);
        if start > end {
            return Ok(Vec::new());
        }

        FoodLogRepository::list_in_range(db, user_id, start, end)
            .await
            .map_err(ApiError::Internal)
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp truncated to its UTC day
pub fn parse_log_date(raw: Option<&str>, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(today);
    };

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc).date_naive())
        .map_err(|_| {
            ValidationError::new("date", "Date must be YYYY-MM-DD or an RFC 3339 timestamp")
        })
}

/// Neither bound: today only. Start only: that day. End only: today to end.
pub fn resolve_date_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
) -> (NaiveDate, NaiveDate) {
    match (start, end) {
        (None, None) => (today, today),
        (Some(start), None) => (start, start),
        (None, Some(end)) => (today, end),
        (Some(start), Some(end)) => (start, end),
    }
}

fn to_decimal(field: &str, value: f64) -> Result<Decimal, ValidationError> {
    Decimal::try_from(value)
        .map(|d| d.round_dp(2))
        .map_err(|_| ValidationError::new(field, "Must be a finite number"))
}

fn validate_meal(meal: &Meal) -> Result<CreateMeal, ValidationError> {
    let name = meal.name.trim();
    if name.is_empty() {
        return Err(ValidationError::new("meal.name", "Meal name is required"));
    }
    let food_name = meal.food_name.trim();
    if food_name.is_empty() {
        return Err(ValidationError::new("meal.food_name", "Food name is required"));
    }

    check_field("meal.calories", || validate_calories(meal.calories))?;
    check_field("meal.protein", || validate_macro_grams(meal.protein))?;
    check_field("meal.carbs", || validate_macro_grams(meal.carbs))?;
    check_field("meal.fats", || validate_macro_grams(meal.fats))?;

    Ok(CreateMeal {
        name: name.to_string(),
        food_name: food_name.to_string(),
        calories: to_decimal("meal.calories", meal.calories)?,
        protein: to_decimal("meal.protein", meal.protein)?,
        carbs: to_decimal("meal.carbs", meal.carbs)?,
        fats: to_decimal("meal.fats", meal.fats)?,
        meal_time: meal.meal_time.as_str().to_string(),
    })
}

#[inline]
fn as_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

fn meal_response(meal: FoodLogMealRecord) -> MealResponse {
    MealResponse {
        id: meal.id.to_string(),
        name: meal.name,
        food_name: meal.food_name,
        calories: as_f64(meal.calories),
        protein: as_f64(meal.protein),
        carbs: as_f64(meal.carbs),
        fats: as_f64(meal.fats),
        meal_time: meal.meal_time.parse().unwrap_or(MealTime::Snack),
    }
}

fn to_response(entry: FoodLogWithMeals) -> FoodLogResponse {
    let FoodLogWithMeals { log, meals } = entry;
    FoodLogResponse {
        id: log.id.to_string(),
        date: log.log_date,
        meals: meals.into_iter().map(meal_response).collect(),
        daily_totals: DailyTotals {
            calories: as_f64(log.total_calories),
            protein: as_f64(log.total_protein),
            carbs: as_f64(log.total_carbs),
            fats: as_f64(log.total_fats),
        },
        created_at: log.created_at,
        updated_at: log.updated_at,
    }
}

fn meals_to_csv(logs: &[FoodLogWithMeals]) -> Result<String, ApiError> {
    let csv_error = |e: csv::Error| ApiError::Internal(anyhow::anyhow!("CSV serialization error: {}", e));

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(vec![]);
    wtr.write_record(CSV_HEADER).map_err(csv_error)?;

    for entry in logs {
        for meal in &entry.meals {
            wtr.serialize(MealCsvRow {
                date: entry.log.log_date,
                meal_time: meal.meal_time.clone(),
                name: meal.name.clone(),
                food_name: meal.food_name.clone(),
                calories: meal.calories,
                protein: meal.protein,
                carbs: meal.carbs,
                fats: meal.fats,
            })
            .map_err(csv_error)?;
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV flush error: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| ApiError::Internal(anyhow::anyhow!("CSV encoding error: {}", e)))
}

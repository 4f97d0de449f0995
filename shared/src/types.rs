//! API request and response types

use crate::models::{DailyTotals, MealTime, Meal, WorkoutDay};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Plain message response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Authentication and Account Types
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Refresh token request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Name and email of an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountSummary {
    pub name: String,
    pub email: String,
}

/// Authentication response with tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: AccountSummary,
}

/// Current user response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Account update request
///
/// The password only changes when both `current_password` and
/// `new_password` are present.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateAccountRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
}

/// Account update response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAccountResponse {
    pub message: String,
    pub user: AccountSummary,
}

// ============================================================================
// Workout Plan Types
// ============================================================================

/// Create or replace a workout plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlanRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub days: Vec<WorkoutDay>,
}

/// Stored workout plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutPlanResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub days: Vec<WorkoutDay>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Preferences and Nutrition Target Types
// ============================================================================

/// Partial preferences update
///
/// Enum-like fields arrive as strings and are parsed by the service so that
/// unknown values are reported as field validation errors.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdatePreferencesRequest {
    /// Body weight in kg
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Height in cm
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Age in years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diet_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_goals: Option<Vec<String>>,
}

/// Preferences together with the stored nutrition targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesView {
    pub name: String,
    pub email: String,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub age: Option<u32>,
    pub gender: String,
    pub activity_level: String,
    pub diet_type: String,
    pub fitness_goals: Vec<String>,
    pub daily_calorie_needs: i32,
    pub daily_protein_needs: i32,
    pub daily_carbs_needs: i32,
    pub daily_fats_needs: i32,
}

/// GET preferences response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreferencesResponse {
    pub user: PreferencesView,
}

/// PUT preferences response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePreferencesResponse {
    pub message: String,
    pub user: PreferencesView,
}

// ============================================================================
// Food Log Types
// ============================================================================

/// Log a meal against a day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogFoodRequest {
    /// `YYYY-MM-DD` or RFC 3339; defaults to today (UTC)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub meal: Meal,
}

/// Stored meal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealResponse {
    pub id: String,
    pub name: String,
    pub food_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub meal_time: MealTime,
}

/// One day's food log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodLogResponse {
    pub id: String,
    pub date: NaiveDate,
    pub meals: Vec<MealResponse>,
    pub daily_totals: DailyTotals,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response after logging a meal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogFoodResponse {
    pub message: String,
    pub food_log: FoodLogResponse,
}

/// Food logs in a date range
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodLogsResponse {
    pub food_logs: Vec<FoodLogResponse>,
}

/// Date range query for food logs
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FoodLogRangeQuery {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

//! Input validation functions
//!
//! Range and format checks applied by the backend before anything reaches
//! the database or the nutrition calculator. Each validator returns a plain
//! message; [`ValidationError`] attaches the field and a display label.

use serde::Serialize;
use validator::ValidateEmail;

// ============================================================================
// Account Validation
// ============================================================================

pub const NAME_MIN_LEN: usize = 4;
pub const NAME_MAX_LEN: usize = 20;
pub const EMAIL_MIN_LEN: usize = 10;
pub const EMAIL_MAX_LEN: usize = 30;
pub const PASSWORD_MIN_LEN: usize = 6;
pub const PASSWORD_MAX_LEN: usize = 20;

/// Validate a display name
pub fn validate_name(name: &str) -> Result<(), String> {
    let len = name.chars().count();
    if len < NAME_MIN_LEN {
        return Err(format!("Name must be at least {} characters", NAME_MIN_LEN));
    }
    if len > NAME_MAX_LEN {
        return Err(format!("Name must be at most {} characters", NAME_MAX_LEN));
    }
    Ok(())
}

/// Validate email format and length
pub fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be empty".to_string());
    }
    let len = email.chars().count();
    if len < EMAIL_MIN_LEN {
        return Err(format!("Email must be at least {} characters", EMAIL_MIN_LEN));
    }
    if len > EMAIL_MAX_LEN {
        return Err(format!("Email must be at most {} characters", EMAIL_MAX_LEN));
    }
    if !email.validate_email() {
        return Err("Invalid email format".to_string());
    }
    Ok(())
}

/// Validate password length
pub fn validate_password(password: &str) -> Result<(), String> {
    let len = password.chars().count();
    if len < PASSWORD_MIN_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            PASSWORD_MIN_LEN
        ));
    }
    if len > PASSWORD_MAX_LEN {
        return Err(format!(
            "Password must be at most {} characters",
            PASSWORD_MAX_LEN
        ));
    }
    Ok(())
}

// ============================================================================
// Body Profile Validation
// ============================================================================

/// Validate weight value (in kg), 20-300
pub fn validate_weight(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 300.0 {
        return Err("Weight must be at most 300 kg".to_string());
    }
    Ok(())
}

/// Validate height value (in cm), 100-250
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 100.0 {
        return Err("Height must be at least 100 cm".to_string());
    }
    if height_cm > 250.0 {
        return Err("Height must be at most 250 cm".to_string());
    }
    Ok(())
}

/// Validate age in years, 13-100
pub fn validate_age(age_years: u32) -> Result<(), String> {
    if age_years < 13 {
        return Err("Age must be at least 13".to_string());
    }
    if age_years > 100 {
        return Err("Age must be at most 100".to_string());
    }
    Ok(())
}

// ============================================================================
// Food Log Validation
// ============================================================================

/// Validate calorie value
pub fn validate_calories(calories: f64) -> Result<(), String> {
    if calories.is_nan() || calories.is_infinite() {
        return Err("Calories must be a valid number".to_string());
    }
    if calories < 0.0 {
        return Err("Calories cannot be negative".to_string());
    }
    if calories > 50000.0 {
        return Err("Calorie value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a macronutrient amount in grams
pub fn validate_macro_grams(grams: f64) -> Result<(), String> {
    if grams.is_nan() || grams.is_infinite() {
        return Err("Amount must be a valid number".to_string());
    }
    if grams < 0.0 {
        return Err("Amount cannot be negative".to_string());
    }
    if grams > 10000.0 {
        return Err("Amount unreasonably high".to_string());
    }
    Ok(())
}

// ============================================================================
// Workout Plan Validation
// ============================================================================

pub const PLAN_NAME_MIN_LEN: usize = 3;
pub const PLAN_NAME_MAX_LEN: usize = 50;
pub const PLAN_DESCRIPTION_MAX_LEN: usize = 200;

/// Validate a workout plan name
pub fn validate_plan_name(name: &str) -> Result<(), String> {
    let len = name.chars().count();
    if len < PLAN_NAME_MIN_LEN {
        return Err(format!(
            "Plan name must be at least {} characters",
            PLAN_NAME_MIN_LEN
        ));
    }
    if len > PLAN_NAME_MAX_LEN {
        return Err(format!(
            "Plan name must be at most {} characters",
            PLAN_NAME_MAX_LEN
        ));
    }
    Ok(())
}

/// Validate a workout plan description
pub fn validate_plan_description(description: &str) -> Result<(), String> {
    if description.chars().count() > PLAN_DESCRIPTION_MAX_LEN {
        return Err(format!(
            "Description must be at most {} characters",
            PLAN_DESCRIPTION_MAX_LEN
        ));
    }
    Ok(())
}

// ============================================================================
// User-Friendly Field Labels
// ============================================================================

/// Map technical field names to user-friendly display labels
pub fn get_field_display_label(field_name: &str) -> &str {
    match field_name {
        "name" => "Name",
        "email" => "Email",
        "password" | "new_password" => "Password",
        "current_password" => "Current Password",
        "weight" => "Weight",
        "height" => "Height",
        "age" => "Age",
        "gender" => "Gender",
        "activity_level" => "Activity Level",
        "diet_type" => "Diet Type",
        "fitness_goals" => "Fitness Goals",
        "description" => "Description",
        "date" | "start_date" | "end_date" => "Date",
        "meal.calories" => "Calories",
        "meal.protein" => "Protein",
        "meal.carbs" => "Carbohydrates",
        "meal.fats" => "Fats",
        _ => field_name,
    }
}

/// Validation error with user-friendly field information
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub display_label: String,
}

impl ValidationError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
            display_label: get_field_display_label(field).to_string(),
        }
    }

    /// Format as user-friendly error message
    pub fn user_message(&self) -> String {
        format!("{}: {}", self.display_label, self.message)
    }
}

/// Run a validator and tag its failure with the field name
pub fn check_field<F>(field: &str, check: F) -> Result<(), ValidationError>
where
    F: FnOnce() -> Result<(), String>,
{
    check().map_err(|message| ValidationError::new(field, &message))
}

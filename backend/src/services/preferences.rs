//! Preferences service
//!
//! Applies partial preference updates and keeps the stored daily nutrition
//! targets in step with the body profile.

use crate::error::ApiError;
use crate::repositories::{PreferencesRecord, PreferencesRepository, UpdatePreferences};
use fitness_tracker_shared::types::{
    PreferencesResponse, PreferencesView, UpdatePreferencesRequest, UpdatePreferencesResponse,
};
use fitness_tracker_shared::validation::{
    check_field, validate_age, validate_height_cm, validate_weight, ValidationError,
};
use fitness_tracker_shared::{
    compute, ActivityLevel, DietType, FitnessGoal, Gender, NutritionProfile, NutritionTargets,
};
use sqlx::PgPool;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

/// Preferences service
pub struct PreferencesService;

impl PreferencesService {
    pub async fn get(db: &PgPool, user_id: Uuid) -> Result<PreferencesResponse, ApiError> {
        let record = PreferencesRepository::get(db, user_id)
            .await
            .map_err(ApiError::Internal)?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        Ok(PreferencesResponse {
            user: preferences_view(record),
        })
    }

    /// Apply a partial update, then recompute targets when weight, height and
    /// age are all known
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        req: UpdatePreferencesRequest,
    ) -> Result<UpdatePreferencesResponse, ApiError> {
        let updates = build_update(req)?;

        let (mut record, targets) = PreferencesRepository::update_with_targets(
            db,
            user_id,
            updates,
            |record| nutrition_profile(record).map(|profile| compute(&profile)),
        )
        .await
        .map_err(ApiError::Internal)?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        if let Some(targets) = targets {
            apply_targets(&mut record, &targets);

            metrics::counter!("nutrition_targets_computed_total").increment(1);
            debug!(%user_id, calories = targets.daily_calories, "Nutrition targets updated");
        }

        Ok(UpdatePreferencesResponse {
            message: "Preferences updated successfully".to_string(),
            user: preferences_view(record),
        })
    }
}

fn parse_field<T>(field: &str, value: &str) -> Result<T, ValidationError>
where
    T: FromStr<Err = String>,
{
    value
        .parse::<T>()
        .map_err(|message| ValidationError::new(field, &message))
}

/// Validate the request and turn it into stored column values
fn build_update(req: UpdatePreferencesRequest) -> Result<UpdatePreferences, ValidationError> {
    if let Some(weight) = req.weight {
        check_field("weight", || validate_weight(weight))?;
    }
    if let Some(height) = req.height {
        check_field("height", || validate_height_cm(height))?;
    }
    if let Some(age) = req.age {
        check_field("age", || validate_age(age))?;
    }

    let gender = req
        .gender
        .as_deref()
        .map(|v| parse_field::<Gender>("gender", v))
        .transpose()?;
    let activity_level = req
        .activity_level
        .as_deref()
        .map(|v| parse_field::<ActivityLevel>("activity_level", v))
        .transpose()?;
    let diet_type = req
        .diet_type
        .as_deref()
        .map(|v| parse_field::<DietType>("diet_type", v))
        .transpose()?;

    let fitness_goals = req.fitness_goals.map(|goals| {
        goals
            .iter()
            .map(|label| label.trim())
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect::<Vec<_>>()
    });

    Ok(UpdatePreferences {
        weight_kg: req.weight,
        height_cm: req.height,
        age_years: req.age.map(|age| age as i32),
        gender: gender.map(|g| g.as_str().to_string()),
        activity_level: activity_level.map(|a| a.as_str().to_string()),
        diet_type: diet_type.map(|d| d.as_str().to_string()),
        fitness_goals,
    })
}

/// Calculator input, available once weight, height and age are stored
fn nutrition_profile(record: &PreferencesRecord) -> Option<NutritionProfile> {
    let weight_kg = record.weight_kg?;
    let height_cm = record.height_cm?;
    let age_years = u32::try_from(record.age_years?).ok()?;

    Some(NutritionProfile {
        weight_kg,
        height_cm,
        age_years,
        gender: record.gender.parse().unwrap_or_default(),
        activity_level: record.activity_level.parse().unwrap_or_default(),
        diet_type: record.diet_type.parse().unwrap_or_default(),
        fitness_goals: record
            .fitness_goals
            .iter()
            .map(|label| FitnessGoal::from_label(label))
            .collect(),
    })
}

fn apply_targets(record: &mut PreferencesRecord, targets: &NutritionTargets) {
    record.daily_calorie_needs = targets.daily_calories;
    record.daily_protein_needs = targets.daily_protein_g;
    record.daily_carbs_needs = targets.daily_carbs_g;
    record.daily_fats_needs = targets.daily_fats_g;
}

fn preferences_view(record: PreferencesRecord) -> PreferencesView {
    PreferencesView {
        name: record.name,
        email: record.email,
        weight: record.weight_kg,
        height: record.height_cm,
        age: record.age_years.and_then(|age| u32::try_from(age).ok()),
        gender: record.gender,
        activity_level: record.activity_level,
        diet_type: record.diet_type,
        fitness_goals: record.fitness_goals,
        daily_calorie_needs: record.daily_calorie_needs,
        daily_protein_needs: record.daily_protein_needs,
        daily_carbs_needs: record.daily_carbs_needs,
        daily_fats_needs: record.daily_fats_needs,
    }
}

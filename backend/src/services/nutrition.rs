//! Stateless nutrition target calculation

use crate::error::ApiError;
use fitness_tracker_shared::{compute_checked, NutritionProfile, NutritionTargets};

/// Nutrition calculation service
pub struct NutritionService;

impl NutritionService {
    /// Validate the profile and compute its daily targets; nothing is stored
    pub fn calculate(profile: &NutritionProfile) -> Result<NutritionTargets, ApiError> {
        let targets = compute_checked(profile)?;
        metrics::counter!("nutrition_targets_computed_total").increment(1);
        Ok(targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fitness_tracker_shared::{ActivityLevel, DietType, Gender};

    fn profile(weight_kg: f64) -> NutritionProfile {
        NutritionProfile {
            weight_kg,
            height_cm: 175.0,
            age_years: 30,
            gender: Gender::Male,
            activity_level: ActivityLevel::Sedentary,
            diet_type: DietType::NonVegetarian,
            fitness_goals: vec![],
        }
    }

    #[test]
    fn test_calculate_returns_targets() {
        let targets = NutritionService::calculate(&profile(70.0)).unwrap();
        // 1648.75 * 1.2
        assert_eq!(targets.daily_calories, 1979);
        assert_eq!(targets.daily_protein_g, 112);
    }

    #[test]
    fn test_calculate_rejects_invalid_profile() {
        let result = NutritionService::calculate(&profile(0.0));
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}

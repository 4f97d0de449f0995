//! Fitness Tracker WASM Module
//!
//! Browser bindings for the nutrition calculator, so targets can be previewed
//! without a round trip to the server.

use fitness_tracker_shared::nutrition::calculate_bmr as shared_bmr;
use fitness_tracker_shared::{compute_checked, Gender, NutritionProfile};
use wasm_bindgen::prelude::*;

/// Parse a JSON profile and return JSON targets
pub fn compute_from_json(profile_json: &str) -> Result<String, String> {
    let profile: NutritionProfile =
        serde_json::from_str(profile_json).map_err(|e| format!("Invalid profile: {}", e))?;
    let targets = compute_checked(&profile).map_err(|e| e.to_string())?;
    serde_json::to_string(&targets).map_err(|e| e.to_string())
}

/// Compute daily nutrition targets from a JSON `NutritionProfile`
#[wasm_bindgen]
pub fn calculate_nutrition_targets(profile_json: &str) -> Result<String, JsValue> {
    compute_from_json(profile_json).map_err(|e| JsValue::from_str(&e))
}

/// Basal metabolic rate (Mifflin-St Jeor); unknown genders use the non-male formula
#[wasm_bindgen]
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: &str) -> f64 {
    let gender = gender.parse::<Gender>().unwrap_or_default();
    shared_bmr(weight_kg, height_cm, age_years, gender)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_from_json() {
        let json = r#"{
            "weight_kg": 70,
            "height_cm": 175,
            "age_years": 30,
            "gender": "male",
            "activity_level": "sedentary",
            "diet_type": "non_vegetarian",
            "fitness_goals": ["muscle gain"]
        }"#;

        let targets: serde_json::Value = serde_json::from_str(&compute_from_json(json).unwrap()).unwrap();
        assert_eq!(targets["daily_calories"], 2176);
        assert_eq!(targets["daily_protein_g"], 154);
    }

    #[test]
    fn test_goals_are_optional() {
        let json = r#"{"weight_kg":70,"height_cm":175,"age_years":30,"gender":"male",
            "activity_level":"sedentary","diet_type":"non_vegetarian"}"#;
        assert!(compute_from_json(json).is_ok());
    }

    #[test]
    fn test_invalid_profiles_are_errors() {
        assert!(compute_from_json("not json").unwrap_err().starts_with("Invalid profile"));

        let json = r#"{"weight_kg":-1,"height_cm":175,"age_years":30,"gender":"male",
            "activity_level":"sedentary","diet_type":"vegan"}"#;
        assert!(compute_from_json(json).unwrap_err().contains("weight_kg"));
    }

    #[test]
    fn test_bmr() {
        assert!((calculate_bmr(70.0, 175.0, 30, "male") - 1648.75).abs() < 1e-9);
        assert!((calculate_bmr(70.0, 175.0, 30, "unknown") - 1482.75).abs() < 1e-9);
    }
}

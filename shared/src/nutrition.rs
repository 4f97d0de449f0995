//! Daily nutrition needs calculator
//!
//! Turns a user's body profile into daily calorie and macronutrient targets:
//!
//! 1. BMR via Mifflin-St Jeor
//! 2. TDEE = BMR × activity multiplier
//! 3. Goal adjustment (deficit for weight loss, surplus for muscle gain)
//! 4. Macro split: protein by body weight, 25% of calories from fat,
//!    carbohydrates take the remainder
//! 5. Plant-based diets shift 10% of protein grams towards carbohydrates
//!
//! Everything here is a pure function of its input. Callers are expected to
//! validate ranges beforehand; [`compute_checked`] exists for callers that
//! want the calculator to reject obviously broken profiles itself.

use crate::errors::NutritionError;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Calculation Constants
// ============================================================================

/// Calorie multiplier applied to TDEE when the user wants to lose weight
pub const WEIGHT_LOSS_CALORIE_FACTOR: f64 = 0.85;
/// Calorie multiplier applied to TDEE when the user wants to gain muscle
pub const MUSCLE_GAIN_CALORIE_FACTOR: f64 = 1.1;

/// Protein grams per kg of body weight, by goal
pub const MUSCLE_GAIN_PROTEIN_G_PER_KG: f64 = 2.2;
pub const WEIGHT_LOSS_PROTEIN_G_PER_KG: f64 = 2.0;
pub const MAINTENANCE_PROTEIN_G_PER_KG: f64 = 1.6;

/// Share of daily calories that comes from fat
pub const FAT_CALORIE_SHARE: f64 = 0.25;

/// Energy density in kcal per gram
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Vegetarian and vegan adjustment factors
pub const PLANT_BASED_PROTEIN_FACTOR: f64 = 0.9;
pub const PLANT_BASED_CARBS_FACTOR: f64 = 1.1;

/// TDEE multiplier per activity level
const ACTIVITY_MULTIPLIERS: [(ActivityLevel, f64); 5] = [
    (ActivityLevel::Sedentary, 1.2),
    (ActivityLevel::LightlyActive, 1.375),
    (ActivityLevel::ModeratelyActive, 1.55),
    (ActivityLevel::VeryActive, 1.725),
    (ActivityLevel::ExtremelyActive, 1.9),
];

/// Multiplier used when no table entry matches
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.2;

// ============================================================================
// Profile Types
// ============================================================================

/// Gender as used by the BMR equation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

/// Habitual activity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[serde(alias = "lightly active")]
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    #[default]
    #[serde(alias = "moderately active")]
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    #[serde(alias = "very active")]
    VeryActive,
    /// Very hard exercise or a physical job
    #[serde(alias = "extremely active")]
    ExtremelyActive,
}

impl ActivityLevel {
    /// TDEE multiplier for this activity level
    pub fn multiplier(&self) -> f64 {
        ACTIVITY_MULTIPLIERS
            .iter()
            .find(|(level, _)| level == self)
            .map(|(_, multiplier)| *multiplier)
            .unwrap_or(DEFAULT_ACTIVITY_MULTIPLIER)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::LightlyActive => "lightly_active",
            ActivityLevel::ModeratelyActive => "moderately_active",
            ActivityLevel::VeryActive => "very_active",
            ActivityLevel::ExtremelyActive => "extremely_active",
        }
    }
}

/// Diet type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    Vegetarian,
    #[default]
    #[serde(alias = "non-vegetarian")]
    NonVegetarian,
    Vegan,
}

impl DietType {
    /// Vegetarian and vegan diets get the plant-based macro adjustment
    pub fn is_plant_based(&self) -> bool {
        matches!(self, DietType::Vegetarian | DietType::Vegan)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DietType::Vegetarian => "vegetarian",
            DietType::NonVegetarian => "non_vegetarian",
            DietType::Vegan => "vegan",
        }
    }
}

macro_rules! impl_label {
    ($ty:ty, $what:literal, [$($variant:expr),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $ty {
            type Err = String;

            /// Accepts the snake_case name as well as the spaced or hyphenated
            /// spelling (`"lightly active"`, `"non-vegetarian"`)
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
                [$($variant),+]
                    .into_iter()
                    .find(|v| v.as_str() == normalized)
                    .ok_or_else(|| format!("Unknown {}: {}", $what, s))
            }
        }
    };
}

impl_label!(Gender, "gender", [Gender::Male, Gender::Female, Gender::Other]);
impl_label!(
    ActivityLevel,
    "activity level",
    [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtremelyActive,
    ]
);
impl_label!(
    DietType,
    "diet type",
    [DietType::Vegetarian, DietType::NonVegetarian, DietType::Vegan]
);

/// A fitness goal label
///
/// Only the exact labels `weight loss` and `muscle gain` influence the
/// calculation. Any other label, including other spellings of those two, is
/// preserved verbatim in `Other` and counts as maintenance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FitnessGoal {
    WeightLoss,
    MuscleGain,
    Other(String),
}

impl FitnessGoal {
    pub const WEIGHT_LOSS_LABEL: &'static str = "weight loss";
    pub const MUSCLE_GAIN_LABEL: &'static str = "muscle gain";

    /// Parse a goal label. Matching is exact and case-sensitive.
    pub fn from_label(label: &str) -> Self {
        match label {
            Self::WEIGHT_LOSS_LABEL => FitnessGoal::WeightLoss,
            Self::MUSCLE_GAIN_LABEL => FitnessGoal::MuscleGain,
            _ => FitnessGoal::Other(label.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            FitnessGoal::WeightLoss => Self::WEIGHT_LOSS_LABEL,
            FitnessGoal::MuscleGain => Self::MUSCLE_GAIN_LABEL,
            FitnessGoal::Other(label) => label,
        }
    }
}

impl From<String> for FitnessGoal {
    fn from(label: String) -> Self {
        FitnessGoal::from_label(&label)
    }
}

impl From<&str> for FitnessGoal {
    fn from(label: &str) -> Self {
        FitnessGoal::from_label(label)
    }
}

impl From<FitnessGoal> for String {
    fn from(goal: FitnessGoal) -> Self {
        match goal {
            FitnessGoal::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

/// Body profile consumed by the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionProfile {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub diet_type: DietType,
    #[serde(default)]
    pub fitness_goals: Vec<FitnessGoal>,
}

impl NutritionProfile {
    fn has_goal(&self, wanted: &FitnessGoal) -> bool {
        self.fitness_goals.iter().any(|goal| goal == wanted)
    }

    /// Reject profiles the formulas cannot give a meaningful answer for
    pub fn validate(&self) -> Result<(), NutritionError> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(NutritionError::InvalidProfile(
                "weight_kg must be a positive number".to_string(),
            ));
        }
        if !self.height_cm.is_finite() || self.height_cm <= 0.0 {
            return Err(NutritionError::InvalidProfile(
                "height_cm must be a positive number".to_string(),
            ));
        }
        if self.age_years == 0 {
            return Err(NutritionError::InvalidProfile(
                "age_years must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Daily targets produced by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct NutritionTargets {
    pub daily_calories: i32,
    pub daily_protein_g: i32,
    pub daily_carbs_g: i32,
    pub daily_fats_g: i32,
}

// ============================================================================
// Calculations
// ============================================================================

/// Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Everyone else: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years as f64;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female | Gender::Other => base - 161.0,
    }
}

/// Compute daily calorie and macro targets for a profile
pub fn compute(profile: &NutritionProfile) -> NutritionTargets {
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age_years,
        profile.gender,
    );
    let mut tdee = bmr * profile.activity_level.multiplier();

    let weight_loss = profile.has_goal(&FitnessGoal::WeightLoss);
    let muscle_gain = profile.has_goal(&FitnessGoal::MuscleGain);

    // Calories: weight loss wins over muscle gain
    if weight_loss {
        tdee *= WEIGHT_LOSS_CALORIE_FACTOR;
    } else if muscle_gain {
        tdee *= MUSCLE_GAIN_CALORIE_FACTOR;
    }

    // Protein: muscle gain wins over weight loss
    let mut protein = if muscle_gain {
        profile.weight_kg * MUSCLE_GAIN_PROTEIN_G_PER_KG
    } else if weight_loss {
        profile.weight_kg * WEIGHT_LOSS_PROTEIN_G_PER_KG
    } else {
        profile.weight_kg * MAINTENANCE_PROTEIN_G_PER_KG
    };

    let fats = (tdee * FAT_CALORIE_SHARE) / KCAL_PER_G_FAT;

    let protein_calories = protein * KCAL_PER_G_PROTEIN;
    let fat_calories = fats * KCAL_PER_G_FAT;
    let mut carbs = (tdee - protein_calories - fat_calories) / KCAL_PER_G_CARBS;

    if profile.diet_type.is_plant_based() {
        protein *= PLANT_BASED_PROTEIN_FACTOR;
        carbs *= PLANT_BASED_CARBS_FACTOR;
    }

    NutritionTargets {
        daily_calories: round_to_int(tdee),
        daily_protein_g: round_to_int(protein),
        daily_carbs_g: round_to_int(carbs),
        daily_fats_g: round_to_int(fats),
    }
}

/// [`compute`] preceded by [`NutritionProfile::validate`]
pub fn compute_checked(profile: &NutritionProfile) -> Result<NutritionTargets, NutritionError> {
    profile.validate()?;
    Ok(compute(profile))
}

/// Round half away from zero; `as` saturates so NaN and infinities never panic
fn round_to_int(value: f64) -> i32 {
    value.round() as i32
}

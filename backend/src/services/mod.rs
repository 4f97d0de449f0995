//! Business logic services
//!
//! Services validate input, coordinate repositories, and map failures to
//! [`ApiError`](crate::error::ApiError).

pub mod food_log;
pub mod nutrition;
pub mod preferences;
pub mod user;
pub mod workout_plan;

pub use food_log::FoodLogService;
pub use nutrition::NutritionService;
pub use preferences::PreferencesService;
pub use user::UserService;
pub use workout_plan::WorkoutPlanService;

//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod food_log;
pub mod preferences;
pub mod user;
pub mod workout_plan;

pub use food_log::{CreateMeal, FoodLogMealRecord, FoodLogRecord, FoodLogRepository, FoodLogWithMeals};
pub use preferences::{PreferencesRecord, PreferencesRepository, UpdatePreferences};
pub use user::{UpdateAccount, UserRecord, UserRepository};
pub use workout_plan::{WorkoutPlanInput, WorkoutPlanRecord, WorkoutPlanRepository};

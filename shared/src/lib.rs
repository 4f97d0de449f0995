//! Fitness Tracker Shared Library
//!
//! This crate contains the nutrition calculator and the types, models, and
//! validation used across the backend and WASM modules.

pub mod errors;
pub mod models;
pub mod nutrition;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use models::*;
pub use nutrition::{
    compute, compute_checked, ActivityLevel, DietType, FitnessGoal, Gender, NutritionProfile,
    NutritionTargets,
};
pub use types::*;

//! Error types shared between the backend and the WASM module

use thiserror::Error;

/// Errors raised by the nutrition calculator's checked entry point
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NutritionError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
}

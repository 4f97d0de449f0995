//! Public nutrition calculator route

use crate::error::ApiResult;
use crate::services::NutritionService;
use crate::state::AppState;
use axum::{routing::post, Json, Router};
use fitness_tracker_shared::{NutritionProfile, NutritionTargets};

pub fn nutrition_routes() -> Router<AppState> {
    Router::new().route("/calculate", post(calculate))
}

/// POST /api/v1/nutrition/calculate
///
/// No authentication; nothing is stored.
async fn calculate(Json(profile): Json<NutritionProfile>) -> ApiResult<Json<NutritionTargets>> {
    let targets = NutritionService::calculate(&profile)?;
    Ok(Json(targets))
}

//! Workout plan routes
//!
//! Plans are private to their owner; another user's plan id answers 404.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::WorkoutPlanService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use fitness_tracker_shared::types::{MessageResponse, WorkoutPlanRequest, WorkoutPlanResponse};

pub fn workout_plan_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_plans).post(create_plan))
        .route("/:id", get(get_plan).put(replace_plan).delete(delete_plan))
}

/// POST /api/v1/workout-plans
async fn create_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<WorkoutPlanRequest>,
) -> ApiResult<(StatusCode, Json<WorkoutPlanResponse>)> {
    let plan = WorkoutPlanService::create(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(plan)))
}

/// GET /api/v1/workout-plans
async fn list_plans(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<WorkoutPlanResponse>>> {
    let plans = WorkoutPlanService::list(state.db(), auth.user_id).await?;
    Ok(Json(plans))
}

/// GET /api/v1/workout-plans/:id
async fn get_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<WorkoutPlanResponse>> {
    let plan = WorkoutPlanService::get(state.db(), auth.user_id, &id).await?;
    Ok(Json(plan))
}

/// PUT /api/v1/workout-plans/:id
async fn replace_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(req): Json<WorkoutPlanRequest>,
) -> ApiResult<Json<WorkoutPlanResponse>> {
    let plan = WorkoutPlanService::replace(state.db(), auth.user_id, &id, req).await?;
    Ok(Json(plan))
}

/// DELETE /api/v1/workout-plans/:id
async fn delete_plan(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    WorkoutPlanService::delete(state.db(), auth.user_id, &id).await?;
    Ok(Json(MessageResponse::new("Workout plan deleted successfully")))
}

//! Food log routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::FoodLogService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::Utc;
use fitness_tracker_shared::types::{
    FoodLogRangeQuery, FoodLogsResponse, LogFoodRequest, LogFoodResponse,
};

pub fn food_log_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_food_logs).post(log_food))
        .route("/export", get(export_food_logs))
}

/// POST /api/v1/food-logs
async fn log_food(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<LogFoodRequest>,
) -> ApiResult<(StatusCode, Json<LogFoodResponse>)> {
    let today = Utc::now().date_naive();
    let response = FoodLogService::log_meal(state.db(), auth.user_id, req, today).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/v1/food-logs?start_date=&end_date=
async fn list_food_logs(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<FoodLogRangeQuery>,
) -> ApiResult<Json<FoodLogsResponse>> {
    let today = Utc::now().date_naive();
    let response = FoodLogService::list(state.db(), auth.user_id, &query, today).await?;
    Ok(Json(response))
}

/// GET /api/v1/food-logs/export - meals in range as CSV
async fn export_food_logs(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<FoodLogRangeQuery>,
) -> ApiResult<impl IntoResponse> {
    let today = Utc::now().date_naive();
    let csv = FoodLogService::export_csv(state.db(), auth.user_id, &query, today).await?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("text/csv"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_static("attachment; filename=\"food-logs.csv\""),
    );

    Ok((headers, csv))
}

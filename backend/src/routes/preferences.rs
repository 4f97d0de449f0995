//! Preferences routes
//!
//! Updating preferences recomputes the stored daily nutrition targets once
//! weight, height and age are all known.

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::PreferencesService;
use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use fitness_tracker_shared::types::{
    PreferencesResponse, UpdatePreferencesRequest, UpdatePreferencesResponse,
};

pub fn preferences_routes() -> Router<AppState> {
    Router::new().route("/", get(get_preferences).put(update_preferences))
}

/// GET /api/v1/preferences
async fn get_preferences(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<PreferencesResponse>> {
    let response = PreferencesService::get(state.db(), auth.user_id).await?;
    Ok(Json(response))
}

/// PUT /api/v1/preferences
async fn update_preferences(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdatePreferencesRequest>,
) -> ApiResult<Json<UpdatePreferencesResponse>> {
    let response = PreferencesService::update(state.db(), auth.user_id, req).await?;
    Ok(Json(response))
}

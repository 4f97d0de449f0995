//! Account management routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, routing::put, Json, Router};
use fitness_tracker_shared::types::{UpdateAccountRequest, UpdateAccountResponse};

pub fn account_routes() -> Router<AppState> {
    Router::new().route("/", put(update_account))
}

/// PUT /api/v1/account
///
/// Name is required; email and password change only when supplied.
async fn update_account(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<UpdateAccountRequest>,
) -> ApiResult<Json<UpdateAccountResponse>> {
    let response = UserService::update_account(state.db(), auth.user_id, req).await?;
    Ok(Json(response))
}

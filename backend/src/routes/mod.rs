//! Route definitions for the Fitness Tracker API
//!
//! Health and metrics endpoints sit at the root; the JSON API is nested under
//! `/api/v1`.

use crate::state::AppState;
use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod account;
mod auth;
mod food_logs;
mod health;
mod nutrition;
mod preferences;
mod workout_plans;

#[cfg(test)]
mod router_tests;

pub use account::account_routes;
pub use auth::auth_routes;
pub use food_logs::food_log_routes;
pub use nutrition::nutrition_routes;
pub use preferences::preferences_routes;
pub use workout_plans::workout_plan_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let server = &state.config().server;
    let timeout = Duration::from_secs(server.request_timeout_secs);
    let body_limit = server.body_limit_bytes;

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .route("/metrics", get(health::metrics))
        .nest("/api/v1", api_routes())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "Fitness Tracker API v1" }))
        .nest("/auth", auth_routes())
        .nest("/account", account_routes())
        .nest("/workout-plans", workout_plan_routes())
        .nest("/preferences", preferences_routes())
        .nest("/nutrition", nutrition_routes())
        .nest("/food-logs", food_log_routes())
}

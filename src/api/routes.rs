//! API route definitions
//!
//! - /predict - time-based grade adjustment
//! - /health  - liveness and uptime

use axum::{routing::get, Router};

use super::handlers::{self, AppState};

/// Create all API routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/predict", get(handlers::predict).fallback(super::method_not_allowed))
        .route("/health", get(handlers::health_check).fallback(super::method_not_allowed))
        .with_state(state)
}

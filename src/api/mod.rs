//! REST API module using Axum
//!
//! Provides the HTTP surface of the grade adjustment service:
//! - `GET /predict` adjusts a grade from its completion time
//! - `GET /health` reports liveness
//!
//! Every error, including panics, unsupported methods and unknown paths,
//! is returned as `{"error": "<message>"}`.

pub mod error;
pub mod handlers;
pub mod middleware;
mod routes;

pub use error::PredictError;
pub use handlers::AppState;

use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::response::Response;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Environment variable listing allowed CORS origins.
pub const CORS_ENV_VAR: &str = "GRADE_CORS_ORIGINS";

async fn not_found() -> Response {
    error::error_response(StatusCode::NOT_FOUND, "Not found")
}

async fn method_not_allowed() -> Response {
    error::error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `GRADE_CORS_ORIGINS` to a comma-separated list of allowed origins
/// (e.g., `http://localhost:3000`), or `*` for any origin, to let browser
/// clients call the API.
fn build_cors_layer() -> CorsLayer {
    cors_layer(std::env::var(CORS_ENV_VAR).ok().as_deref())
}

/// CORS layer for an optional comma-separated origin list.
pub fn cors_layer(origins: Option<&str>) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    let Some(origins) = origins else {
        return base;
    };

    tracing::info!(origins = %origins, "CORS: allowing configured origins");
    if origins.trim() == "*" {
        return base.allow_origin(AllowOrigin::any());
    }

    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty() && *o != "*")
        .filter_map(|o| o.parse().ok())
        .collect();
    base.allow_origin(allowed)
}

/// Create the complete application router.
pub fn create_app(state: AppState) -> Router {
    routes::api_routes(state)
        .fallback(not_found)
        .layer(middleware::catch_panic_layer())
        .layer(TraceLayer::new_for_http())
        .layer(build_cors_layer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    async fn allow_origin_for(origins: Option<&str>, origin: &str) -> Option<HeaderValue> {
        let app = routes::api_routes(AppState::default()).layer(cors_layer(origins));
        let resp = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .cloned()
    }

    #[tokio::test]
    async fn test_cors_listed_origin_allowed() {
        let origins = Some("http://localhost:3000, https://grades.example.com");
        let v = allow_origin_for(origins, "https://grades.example.com").await;
        assert_eq!(v.unwrap(), "https://grades.example.com");
    }

    #[tokio::test]
    async fn test_cors_unlisted_origin_not_allowed() {
        let v = allow_origin_for(Some("http://localhost:3000"), "https://evil.example").await;
        assert!(v.is_none());
    }

    #[tokio::test]
    async fn test_cors_same_origin_only_by_default() {
        assert!(allow_origin_for(None, "http://localhost:3000").await.is_none());
    }

    #[tokio::test]
    async fn test_cors_wildcard() {
        let v = allow_origin_for(Some("*"), "https://anywhere.example").await;
        assert_eq!(v.unwrap(), "*");
    }

    #[tokio::test]
    async fn test_unsupported_method_is_json_405() {
        let app = create_app(AppState::default());
        let resp = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["error"], "Method not allowed");
    }
}

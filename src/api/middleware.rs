//! API middleware layers.
//!
//! Converts handler panics into the standard JSON 500 body so that no
//! failure path ever returns an empty response.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use tower_http::catch_panic::CatchPanicLayer;

use super::error::PredictError;

/// Panic hook for [`CatchPanicLayer`].
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let msg = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    PredictError::Internal(msg).into_response()
}

/// Layer that routes panics through [`handle_panic`].
pub fn catch_panic_layer() -> CatchPanicLayer<fn(Box<dyn Any + Send + 'static>) -> Response> {
    CatchPanicLayer::custom(handle_panic as fn(Box<dyn Any + Send + 'static>) -> Response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    async fn boom() -> &'static str {
        panic!("exploded")
    }

    #[tokio::test]
    async fn test_panic_becomes_json_500() {
        let app = Router::new()
            .route("/boom", get(boom))
            .layer(catch_panic_layer());

        let resp = app
            .oneshot(Request::get("/boom").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["error"], "Server error: exploded");
    }

    #[test]
    fn test_non_string_payload() {
        let resp = handle_panic(Box::new(42_u32));
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

//! Keyguard API Routes
//!
//! - /health - liveness (public)
//! - /keyguard/verify - reports whether the request carries a key (public)
//! - /keyguard/whoami - requires a well-formed ApiKey header

pub mod health;
pub mod keys;

use axum::{middleware, Router};
use keyguard::auth_middleware;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router
pub fn router() -> Router {
    // Protected routes (require authentication)
    let protected_routes = keys::protected_router().layer(middleware::from_fn(auth_middleware));

    Router::new()
        .merge(health::router())
        .merge(keys::public_router())
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        response::Response,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    fn get(uri: &str, authorization: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let response = router().oneshot(get("/health", None)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_whoami_with_key() {
        let response = router()
            .oneshot(get("/keyguard/whoami", Some("ApiKey test-api-key-123")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["authenticated"], true);
        assert_eq!(body["scheme"], "ApiKey");
        assert_eq!(body["key_length"], 16);
    }

    #[tokio::test]
    async fn test_whoami_without_key() {
        let response = router()
            .oneshot(get("/keyguard/whoami", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await["error"],
            "no authorization header included"
        );
    }

    #[tokio::test]
    async fn test_whoami_wrong_case_scheme() {
        let response = router()
            .oneshot(get("/keyguard/whoami", Some("apikey test-key")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await["error"],
            "malformed authorization header"
        );
    }

    #[tokio::test]
    async fn test_verify_reports_without_rejecting() {
        let response = router()
            .oneshot(get("/keyguard/verify", Some("Bearer token123")))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["valid"], false);
        assert_eq!(body["error"], "malformed authorization header");

        let response = router()
            .oneshot(get("/keyguard/verify", Some("ApiKey abc")))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["valid"], true);
        assert!(body["error"].is_null());
    }
}

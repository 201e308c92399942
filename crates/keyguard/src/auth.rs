//! API Key Authentication (`Authorization: ApiKey <token>`)
//!
//! axum glue around [`ApiKey`]: an extractor for handlers and a middleware
//! for whole routers.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Request},
    http::{header, request::Parts, HeaderValue},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::domain::{ApiKey, AuthError, API_KEY_SCHEME};

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let mut response = (self.status_code(), Json(json!({ "error": self.to_string() })))
            .into_response();
        response.headers_mut().insert(
            header::WWW_AUTHENTICATE,
            HeaderValue::from_static(API_KEY_SCHEME),
        );
        response
    }
}

/// Handler extractor
///
/// Reuses the key stored by [`auth_middleware`] when present, otherwise
/// parses the request headers.
#[async_trait]
impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(key) = parts.extensions.get::<ApiKey>() {
            return Ok(key.clone());
        }

        ApiKey::from_headers(&parts.headers).map_err(|e| {
            tracing::warn!(kind = e.kind(), "API key rejected: {}", e);
            e
        })
    }
}

/// Authentication middleware
/// Rejects requests without a well-formed `ApiKey` header
pub async fn auth_middleware(mut request: Request, next: Next) -> Result<Response, AuthError> {
    let key = match ApiKey::from_headers(request.headers()) {
        Ok(key) => key,
        Err(e) => {
            tracing::warn!(
                kind = e.kind(),
                path = %request.uri().path(),
                "API key rejected: {}",
                e
            );
            return Err(e);
        }
    };

    request.extensions_mut().insert(key);
    Ok(next.run(request).await)
}

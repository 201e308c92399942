//! Key Routes - inspect the ApiKey carried by a request
//!
//! Responses never echo the token itself.

use axum::{http::HeaderMap, routing::get, Json, Router};
use keyguard::{get_api_key, ApiKey, API_KEY_SCHEME};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WhoAmIResponse {
    pub authenticated: bool,
    pub scheme: &'static str,
    pub key_length: usize,
}

/// Report whether the request carries a well-formed key. Always 200.
pub async fn verify(headers: HeaderMap) -> Json<VerifyResponse> {
    let response = match get_api_key(&headers) {
        Ok(_) => VerifyResponse {
            valid: true,
            error: None,
        },
        Err(e) => VerifyResponse {
            valid: false,
            error: Some(e.to_string()),
        },
    };

    Json(response)
}

/// Describe the authenticated caller
pub async fn whoami(key: ApiKey) -> Json<WhoAmIResponse> {
    tracing::debug!("whoami for {}", key);

    Json(WhoAmIResponse {
        authenticated: true,
        scheme: API_KEY_SCHEME,
        key_length: key.as_str().len(),
    })
}

pub fn public_router() -> Router {
    Router::new().route("/keyguard/verify", get(verify))
}

pub fn protected_router() -> Router {
    Router::new().route("/keyguard/whoami", get(whoami))
}

//! Keyguard Library
//!
//! Extracts the API key carried in an `Authorization: ApiKey <token>` header.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): pure parsing, no I/O
//!   - `api_key`: the `ApiKey` credential and `get_api_key`
//!   - `errors`: `AuthError`
//!
//! - **axum glue** (`auth`): extractor and middleware
//!
//! # Usage
//!
//! ```rust,ignore
//! use axum::{middleware, routing::get, Router};
//! use keyguard::{auth_middleware, ApiKey};
//!
//! async fn handler(key: ApiKey) -> String {
//!     format!("{} byte key", key.as_str().len())
//! }
//!
//! let app: Router = Router::new()
//!     .route("/", get(handler))
//!     .layer(middleware::from_fn(auth_middleware));
//! ```

pub mod auth;
pub mod domain;

// Re-export commonly used types
pub use auth::auth_middleware;
pub use domain::{get_api_key, ApiKey, AuthError, API_KEY_SCHEME};

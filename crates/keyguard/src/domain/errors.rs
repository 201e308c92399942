//! Domain Errors
//!
//! Why an API key could not be extracted.

use axum::http::StatusCode;
use thiserror::Error;

/// Authorization header extraction errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Header absent, or present with an empty value
    #[error("no authorization header included")]
    MissingHeader,

    /// Header present but not of the form `ApiKey <token>`
    #[error("malformed authorization header")]
    MalformedHeader,
}

impl AuthError {
    /// HTTP status a handler should answer with
    pub fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    /// Short machine-readable name, safe to log
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingHeader => "missing_header",
            Self::MalformedHeader => "malformed_header",
        }
    }
}

//! ApiKey - Credential carried in `Authorization: ApiKey <token>`

use std::fmt;

use axum::http::{header, HeaderMap};

use super::errors::AuthError;

/// Scheme keyword expected before the token. Matched case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// API key extracted from a request
///
/// `Debug` and `Display` redact the token so a key never ends up in logs
/// through formatting. Use [`ApiKey::as_str`] to read it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ApiKey(String);

impl ApiKey {
    /// Parse a raw `Authorization` header value.
    ///
    /// The value is split on its first whitespace run into scheme and token.
    /// Anything after that run, including further whitespace, belongs to the
    /// token.
    pub fn from_authorization(value: &str) -> Result<Self, AuthError> {
        if value.is_empty() {
            return Err(AuthError::MissingHeader);
        }

        let (scheme, token) = match value.split_once(char::is_whitespace) {
            Some((scheme, rest)) => (scheme, rest.trim_start()),
            None => (value, ""),
        };

        if scheme != API_KEY_SCHEME || token.is_empty() {
            return Err(AuthError::MalformedHeader);
        }

        Ok(Self(token.to_string()))
    }

    /// Extract the key from a header collection.
    ///
    /// Only the first `Authorization` value is considered. Values that are
    /// not visible ASCII count as malformed.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, AuthError> {
        let Some(value) = headers.get(header::AUTHORIZATION) else {
            return Err(AuthError::MissingHeader);
        };

        let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;
        Self::from_authorization(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&"<redacted>").finish()
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <redacted>", API_KEY_SCHEME)
    }
}

/// Get the API key from the `Authorization` header
pub fn get_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    ApiKey::from_headers(headers).map(ApiKey::into_inner)
}

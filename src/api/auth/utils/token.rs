use crate::handler::error::ApiError;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use std::fmt;

/// Opaque bearer credential attached to report and export requests.
///
/// The token is always handed to request builders explicitly; nothing in the
/// crate reads it from ambient storage in the middle of a call.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wraps a raw token, trimming surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`ApiError::NotAuthenticated`] if the token is empty.
    pub fn new(raw: impl Into<String>) -> Result<Self, ApiError> {
        let raw = raw.into();
        let token = raw.trim();
        if token.is_empty() {
            return Err(ApiError::NotAuthenticated);
        }
        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First few characters followed by an ellipsis, for log lines.
    pub fn masked(&self) -> String {
        let head: String = self.0.chars().take(6).collect();
        format!("{}…", head)
    }

    pub fn header_value(&self) -> Result<HeaderValue, ApiError> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.0))
            .map_err(|e| ApiError::SessionError(format!("Invalid bearer token: {}", e)))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BearerToken({})", self.masked())
    }
}

pub fn add_bearer_to_headers(headers: &mut HeaderMap, token: &BearerToken) -> Result<(), ApiError> {
    headers.insert(AUTHORIZATION, token.header_value()?);
    Ok(())
}

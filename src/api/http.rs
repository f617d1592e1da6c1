use crate::api::auth::utils::token::{BearerToken, add_bearer_to_headers};
use crate::handler::error::ApiError;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use std::time::Duration;

pub(crate) const USER_AGENT_STR: &str = concat!("librassetdesk/", env!("CARGO_PKG_VERSION"));
pub(crate) const ACCEPT_JSON: &str = "application/json";
pub(crate) const ACCEPT_ANY: &str = "*/*";
const BODY_SNIPPET_LEN: usize = 200;

pub(crate) fn build_client(timeout: Duration) -> Result<Client, ApiError> {
    Client::builder()
        .user_agent(USER_AGENT_STR)
        .timeout(timeout)
        .gzip(true)
        .brotli(true)
        .deflate(true)
        .build()
        .map_err(|e| {
            log::error!("Failed to build HTTP client: {}", e);
            ApiError::from(e)
        })
}

pub(crate) fn build_headers(
    token: Option<&BearerToken>,
    accept: &'static str,
) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_STR));
    headers.insert(ACCEPT, HeaderValue::from_static(accept));
    if let Some(token) = token {
        add_bearer_to_headers(&mut headers, token)?;
    }
    Ok(headers)
}

/// Appends an already-encoded query string, if any.
pub(crate) fn with_query(url: String, query: &str) -> String {
    if query.is_empty() {
        url
    } else {
        format!("{}?{}", url, query)
    }
}

/// Passes 2xx responses through and turns everything else into an error.
pub(crate) fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body: String = response
        .text()
        .unwrap_or_default()
        .chars()
        .take(BODY_SNIPPET_LEN)
        .collect();
    log::error!("HTTP {} - {}", status, body);
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::NotAuthenticated);
    }
    Err(ApiError::HttpStatus {
        status: status.as_u16(),
        body,
    })
}

//! Client for the filtered asset report and its CSV/PDF exports.
//!
//! Both requests carry the current [`FilterCriteria`] as query parameters and
//! an `Authorization: Bearer` header built from the token passed in by the
//! caller.

use super::parse::parse_assets;
use super::structs::{Asset, ExportFormat, FilterCriteria};
use crate::api::auth::utils::token::BearerToken;
use crate::api::http::{
    ACCEPT_ANY, ACCEPT_JSON, build_client, build_headers, ensure_success, with_query,
};
use crate::handler::env::EnvConfig;
use crate::handler::error::ApiError;
use reqwest::blocking::Client;

/// Client for `/report/assets` and `/report/assets/export/{format}`.
///
/// # Example
/// ```no_run
/// use librassetdesk::{BearerToken, FilterCriteria, FilterField, ReportClient};
///
/// let client = ReportClient::new()?;
/// let token = BearerToken::new("secret")?;
/// let mut filters = FilterCriteria::new();
/// filters.set(FilterField::Status, "live")?;
/// let assets = client.fetch_report(&token, &filters)?;
/// println!("{} live assets", assets.len());
/// # Ok::<(), librassetdesk::ApiError>(())
/// ```
pub struct ReportClient {
    client: Client,
    config: EnvConfig,
}

impl ReportClient {
    /// Creates a client with configuration loaded from the environment.
    ///
    /// # Errors
    /// Returns [`ApiError`] if `BASE_URL` is missing or the HTTP client cannot be built.
    pub fn new() -> Result<Self, ApiError> {
        let config = EnvConfig::load()?;
        Self::with_config(config)
    }

    pub fn with_config(config: EnvConfig) -> Result<Self, ApiError> {
        let client = build_client(config.request_timeout)?;
        Ok(Self { client, config })
    }

    /// Fetches the assets matching `filters`.
    ///
    /// # Errors
    /// Returns [`ApiError`] if:
    /// - The request fails (network, timeout).
    /// - The server answers 401 ([`ApiError::NotAuthenticated`]) or another non-2xx status.
    /// - The body is not a list of assets.
    pub fn fetch_report(
        &self,
        token: &BearerToken,
        filters: &FilterCriteria,
    ) -> Result<Vec<Asset>, ApiError> {
        let url = with_query(self.config.full_report_url(), &filters.query_string());
        let headers = build_headers(Some(token), ACCEPT_JSON)?;
        log::debug!("Fetching report from: {} (token {})", url, token.masked());
        let response = self.client.get(&url).headers(headers).send().map_err(|e| {
            log::error!("Network error while fetching report: {}", e);
            ApiError::from(e)
        })?;
        let body = ensure_success(response)?.text()?;
        let assets = parse_assets(&body)?;
        log::info!("Report returned {} assets", assets.len());
        Ok(assets)
    }

    /// Downloads the server-rendered export for `filters` as raw bytes.
    ///
    /// The body is never interpreted; CSV and PDF are both returned verbatim.
    pub fn export_report(
        &self,
        token: &BearerToken,
        filters: &FilterCriteria,
        format: ExportFormat,
    ) -> Result<Vec<u8>, ApiError> {
        let url = with_query(
            self.config.full_export_url(format.as_str()),
            &filters.query_string(),
        );
        let headers = build_headers(Some(token), ACCEPT_ANY)?;
        log::debug!("Exporting {} from: {}", format, url);
        let response = self.client.get(&url).headers(headers).send().map_err(|e| {
            log::error!("Network error while exporting {}: {}", format, e);
            ApiError::from(e)
        })?;
        let bytes = ensure_success(response)?.bytes()?;
        log::info!("Export {} received ({} bytes)", format, bytes.len());
        Ok(bytes.to_vec())
    }
}

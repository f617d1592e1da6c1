use super::parse::parse_assets;
use super::structs::Asset;
use crate::api::auth::utils::token::BearerToken;
use crate::api::http::{ACCEPT_JSON, build_client, build_headers, ensure_success};
use crate::handler::env::EnvConfig;
use crate::handler::error::ApiError;
use reqwest::blocking::Client;

/// Client for the plain asset collection endpoint.
pub struct AssetListClient {
    client: Client,
    config: EnvConfig,
}

impl AssetListClient {
    pub fn new() -> Result<Self, ApiError> {
        let config = EnvConfig::load()?;
        Self::with_config(config)
    }

    pub fn with_config(config: EnvConfig) -> Result<Self, ApiError> {
        let client = build_client(config.request_timeout)?;
        Ok(Self { client, config })
    }

    /// Fetches every asset. The bearer header is only sent when a token is given.
    pub fn fetch_assets(&self, token: Option<&BearerToken>) -> Result<Vec<Asset>, ApiError> {
        let url = self.config.full_assets_url();
        let headers = build_headers(token, ACCEPT_JSON)?;
        log::debug!("Fetching assets from: {}", url);
        let response = self.client.get(&url).headers(headers).send().map_err(|e| {
            log::error!("Network error while fetching assets: {}", e);
            ApiError::from(e)
        })?;
        let body = ensure_success(response)?.text()?;
        let assets = parse_assets(&body)?;
        log::debug!("Received {} assets", assets.len());
        Ok(assets)
    }
}

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_ASSETS_ENDPOINT: &str = "/api/assets";
const DEFAULT_REPORT_ENDPOINT: &str = "/report/assets";
const DEFAULT_EXPORT_ENDPOINT: &str = "/report/assets/export";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum EnvError {
    #[error("Environment variable {0} not found")]
    NotFound(String),
    #[error("Invalid environment variable: {0}")]
    Invalid(String),
}
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub base_url: String,
    pub assets_endpoint: String,
    pub report_endpoint: String,
    pub export_endpoint: String,
    pub api_token: Option<String>,
    pub download_dir: Option<PathBuf>,
    pub request_timeout: Duration,
}
impl EnvConfig {
    pub fn load() -> Result<Self, EnvError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }
    /// Builds the configuration from an arbitrary key lookup instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EnvError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let base_url = get("BASE_URL").ok_or_else(|| EnvError::NotFound("BASE_URL".to_string()))?;
        let request_timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|_| {
                    EnvError::Invalid(format!("REQUEST_TIMEOUT_SECS={} is not a number", raw))
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };
        Ok(Self {
            base_url,
            assets_endpoint: get("ASSETS_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_ASSETS_ENDPOINT.to_string()),
            report_endpoint: get("REPORT_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_REPORT_ENDPOINT.to_string()),
            export_endpoint: get("EXPORT_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_EXPORT_ENDPOINT.to_string()),
            api_token: get("API_TOKEN"),
            download_dir: get("DOWNLOAD_DIR").map(PathBuf::from),
            request_timeout,
        })
    }
    pub fn from_values(base_url: String) -> Self {
        Self {
            base_url,
            assets_endpoint: DEFAULT_ASSETS_ENDPOINT.to_string(),
            report_endpoint: DEFAULT_REPORT_ENDPOINT.to_string(),
            export_endpoint: DEFAULT_EXPORT_ENDPOINT.to_string(),
            api_token: None,
            download_dir: None,
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
    pub fn full_assets_url(&self) -> String {
        join_url(&self.base_url, &self.assets_endpoint)
    }
    pub fn full_report_url(&self) -> String {
        join_url(&self.base_url, &self.report_endpoint)
    }
    pub fn full_export_url(&self, format: &str) -> String {
        let endpoint = join_url(&self.base_url, &self.export_endpoint);
        format!("{}/{}", endpoint.trim_end_matches('/'), format)
    }
}
fn join_url(base: &str, endpoint: &str) -> String {
    let base = base.trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    format!("{}/{}", base, endpoint)
}

use crate::api::assets::{AssetListClient, ReportClient};
use crate::api::auth::utils::cache::{SessionData, SessionManager};
use crate::api::auth::utils::token::BearerToken;
use crate::handler::env::EnvConfig;
use crate::handler::error::ApiError;
use crate::view::DownloadDir;
use std::path::PathBuf;

pub struct AssetDeskClient {
    pub config: EnvConfig,
    pub session_manager: SessionManager,
}

impl AssetDeskClient {
    pub fn new() -> Result<Self, ApiError> {
        let config = EnvConfig::load()?;
        Ok(Self {
            config,
            session_manager: SessionManager::new()?,
        })
    }

    pub fn with_parts(config: EnvConfig, session_manager: SessionManager) -> Self {
        Self {
            config,
            session_manager,
        }
    }

    /// Resolves the bearer token: `API_TOKEN` first, then the stored session.
    pub fn credential(&self) -> Result<BearerToken, ApiError> {
        if let Some(token) = &self.config.api_token {
            log::debug!("Using API_TOKEN from environment");
            return BearerToken::new(token.clone());
        }
        match self.session_manager.load()? {
            Some(session) => session.bearer(),
            None => Err(ApiError::NotAuthenticated),
        }
    }

    /// Like [`credential`](Self::credential) but `None` instead of `NotAuthenticated`.
    pub fn optional_credential(&self) -> Result<Option<BearerToken>, ApiError> {
        match self.credential() {
            Ok(token) => Ok(Some(token)),
            Err(ApiError::NotAuthenticated) => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn save_token(&self, raw: &str) -> Result<SessionData, ApiError> {
        let token = BearerToken::new(raw)?;
        self.session_manager.save_token(&token)
    }

    pub fn clear_session(&self) -> Result<(), ApiError> {
        self.session_manager.clear()
    }

    pub fn check_session(&self) -> Result<Option<SessionData>, ApiError> {
        self.session_manager.load()
    }

    pub fn cache_file_path(&self) -> PathBuf {
        self.session_manager.cache_file_path().to_path_buf()
    }

    pub fn asset_list_client(&self) -> Result<AssetListClient, ApiError> {
        AssetListClient::with_config(self.config.clone())
    }

    pub fn report_client(&self) -> Result<ReportClient, ApiError> {
        ReportClient::with_config(self.config.clone())
    }

    /// Download directory from `override_dir`, then `DOWNLOAD_DIR`, then the platform default.
    pub fn download_dir(&self, override_dir: Option<PathBuf>) -> DownloadDir {
        let explicit = override_dir.or_else(|| self.config.download_dir.clone());
        DownloadDir::resolve(explicit.as_deref())
    }
}

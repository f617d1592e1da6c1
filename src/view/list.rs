use super::render::render_cards;
use crate::api::assets::list::AssetListClient;
use crate::api::assets::structs::Asset;
use crate::api::auth::utils::token::BearerToken;
use crate::handler::error::ApiError;

/// State of the asset list page: one fetch per load, rendered as cards.
#[derive(Debug)]
pub struct AssetListView {
    loading: bool,
    assets: Vec<Asset>,
    last_error: Option<String>,
}

impl AssetListView {
    /// A freshly mounted view is loading until its first fetch settles.
    pub fn new() -> Self {
        Self {
            loading: true,
            assets: Vec::new(),
            last_error: None,
        }
    }

    /// Fetches the asset collection once and stores the result.
    ///
    /// Failures are logged and kept in [`last_error`](Self::last_error); the
    /// list stays as it was. `loading` is cleared either way.
    pub fn load(&mut self, client: &AssetListClient, token: Option<&BearerToken>) {
        self.loading = true;
        let result = client.fetch_assets(token);
        self.settle(result);
    }

    /// Applies a finished fetch.
    pub fn settle(&mut self, result: Result<Vec<Asset>, ApiError>) {
        match result {
            Ok(assets) => {
                self.assets = assets;
                self.last_error = None;
            }
            Err(e) => {
                log::error!("Failed to fetch assets: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn render(&self) -> String {
        if self.loading {
            return "Loading...".to_string();
        }
        if self.assets.is_empty() {
            return "No assets found.".to_string();
        }
        render_cards(&self.assets)
    }
}

impl Default for AssetListView {
    fn default() -> Self {
        Self::new()
    }
}

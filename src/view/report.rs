//! State of the asset report page.
//!
//! Filter edits are purely local. Fetches go through a [`FetchTicket`] that
//! records the request generation and a snapshot of the filters; only the
//! completion of the most recently issued ticket is applied, so a slow
//! response can never overwrite a newer one. Exports run outside this
//! bookkeeping and leave the list and loading flag alone.

use super::download::DownloadDir;
use super::render::{DateFormatter, render_report_table};
use crate::api::assets::report::ReportClient;
use crate::api::assets::structs::{Asset, ExportFormat, FilterCriteria, FilterField};
use crate::api::auth::utils::token::BearerToken;
use crate::handler::error::ApiError;
use std::path::PathBuf;

/// Handle for one issued report request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    filters: FilterCriteria,
}

impl FetchTicket {
    /// Filters as they were when the request was issued.
    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the list.
    Applied,
    /// The latest request failed; the previous list is still shown.
    Failed,
    /// A newer request (or a clear) superseded this one.
    Discarded,
}

#[derive(Debug, Default)]
pub struct AssetReportView {
    filters: FilterCriteria,
    assets: Vec<Asset>,
    loading: bool,
    generation: u64,
    last_error: Option<String>,
}

impl AssetReportView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    /// Edits one filter field. No request is made.
    pub fn set_filter(&mut self, field: FilterField, raw: &str) -> Result<(), ApiError> {
        self.filters.set(field, raw)
    }

    /// Marks a new request as in flight and invalidates all older tickets.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket {
            generation: self.generation,
            filters: self.filters.clone(),
        }
    }

    /// Applies the result of `ticket` if it is still the latest request.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<Asset>, ApiError>,
    ) -> FetchOutcome {
        if ticket.generation != self.generation {
            log::warn!(
                "Discarding report response #{} (latest is #{})",
                ticket.generation,
                self.generation
            );
            return FetchOutcome::Discarded;
        }
        self.loading = false;
        match result {
            Ok(assets) => {
                self.assets = assets;
                self.last_error = None;
                FetchOutcome::Applied
            }
            Err(e) => {
                log::error!("Fetch failed: {}", e);
                self.last_error = Some(e.to_string());
                FetchOutcome::Failed
            }
        }
    }

    /// Runs one report request with the current filters.
    pub fn apply_filters(&mut self, client: &ReportClient, token: &BearerToken) -> FetchOutcome {
        let ticket = self.begin_fetch();
        let result = client.fetch_report(token, ticket.filters());
        self.complete_fetch(ticket, result)
    }

    /// Downloads the export for the current filters into `downloads`.
    pub fn export(
        &self,
        client: &ReportClient,
        token: &BearerToken,
        format: ExportFormat,
        downloads: &DownloadDir,
    ) -> Result<PathBuf, ApiError> {
        client
            .export_report(token, &self.filters, format)
            .and_then(|bytes| downloads.save(format, &bytes))
            .inspect_err(|e| log::error!("Export failed: {}", e))
    }

    /// Resets filters and results without touching the network.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.assets.clear();
        self.last_error = None;
        self.loading = false;
        self.generation += 1;
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

    pub fn render(&self, dates: &DateFormatter) -> String {
        if self.loading {
            return "Loading assets...".to_string();
        }
        if self.assets.is_empty() {
            return "No assets found.".to_string();
        }
        render_report_table(&self.assets, dates)
    }
}

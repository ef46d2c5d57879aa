//! Comment ingestion pipeline
//!
//! Wires validation, the single-page fetch, and the replace-store into the
//! three operations an embedding shell invokes. Validation outcomes are
//! returned as values instead of being tracked in ambient state.

use std::path::PathBuf;

use crate::core::config::AppConfig;
use crate::core::exporter::{self, ExportOutcome};
use crate::core::fetcher::CommentFetcher;
use crate::core::models::{AppError, AppResult, Comment, FetchRequest, FetchSummary};
use crate::core::store::CommentStore;
use crate::utils::validation;

/// Session state for one ingestion pipeline: a fetcher bound to the API
/// configuration and a store bound to the local database path.
pub struct CommentPipeline {
    fetcher: CommentFetcher,
    store: CommentStore,
}

impl CommentPipeline {
    /// Assemble a pipeline from already-built parts.
    pub fn new(fetcher: CommentFetcher, store: CommentStore) -> Self {
        Self { fetcher, store }
    }

    /// Build a pipeline from the application configuration.
    pub fn from_config(config: &AppConfig) -> AppResult<Self> {
        let fetcher = CommentFetcher::new(&config.api, config.resolve_api_key())?;

        let db_path = config
            .database_path()
            .map_err(|e| AppError::Config(e.to_string()))?;

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::StoreUnavailable(format!(
                    "Failed to create {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        Ok(Self::new(fetcher, CommentStore::new(db_path)))
    }

    /// Validate the raw inputs, fetch one page of comments, and replace the
    /// store contents with the result.
    ///
    /// The amount is checked before the URL, matching the original entry
    /// form. The store is written only after the fetch has fully succeeded;
    /// on any error the previously persisted rows are left untouched.
    pub fn validate_and_fetch(&self, url_text: &str, count_text: &str) -> AppResult<FetchSummary> {
        let bounded = validation::parse_max_results(count_text)?;
        let video_id = validation::extract_video_id(url_text)?;

        let request = FetchRequest {
            video_id,
            max_results: bounded.value,
        };

        let comments = self.fetcher.fetch_comments(&request)?;
        self.store.replace_all(&comments)?;

        Ok(FetchSummary {
            video_id: request.video_id,
            max_results: bounded.value,
            clamped: bounded.clamped,
            stored: comments.len(),
        })
    }

    /// Read back every stored comment in fetch order.
    pub fn list_stored_comments(&self) -> AppResult<Vec<Comment>> {
        self.store.read_all()
    }

    /// Export the stored table as CSV; `None` means the destination choice
    /// was cancelled.
    pub fn export_to(&self, path: Option<PathBuf>) -> AppResult<ExportOutcome> {
        exporter::export_csv(&self.store, path)
    }
}

//! Comment command handlers
//!
//! The boundary an embedding shell invokes: thin wrappers around the
//! pipeline that log each operation and render errors for display.

use std::path::PathBuf;

use tracing::{error, info};

use crate::core::exporter::ExportOutcome;
use crate::core::models::{Comment, FetchSummary};
use crate::AppState;

/// Validate the raw inputs and collect one page of comments into the store
pub fn collect_comments(
    state: &AppState,
    url: String,
    amount: String,
) -> Result<FetchSummary, String> {
    info!("💬 Collecting comments for: {}", url);

    match state.pipeline.validate_and_fetch(&url, &amount) {
        Ok(summary) => {
            if summary.clamped {
                info!("Requested amount clamped to {}", summary.max_results);
            }
            info!(
                "✅ Stored {} comments for video {}",
                summary.stored, summary.video_id
            );
            Ok(summary)
        }
        Err(e) => {
            error!("❌ Failed to collect comments: {}", e);
            Err(e.to_string())
        }
    }
}

/// Read back the cached comment table
pub fn list_comments(state: &AppState) -> Result<Vec<Comment>, String> {
    info!("📋 Listing stored comments");

    match state.pipeline.list_stored_comments() {
        Ok(comments) => {
            info!("✅ Loaded {} stored comments", comments.len());
            Ok(comments)
        }
        Err(e) => {
            error!("❌ Failed to list comments: {}", e);
            Err(e.to_string())
        }
    }
}

/// Export the cached comment table as CSV
pub fn export_comments(
    state: &AppState,
    path: Option<PathBuf>,
) -> Result<ExportOutcome, String> {
    info!("📤 Exporting stored comments");

    match state.pipeline.export_to(path) {
        Ok(ExportOutcome::Written(path)) => {
            info!("✅ Data exported to {}", path.display());
            Ok(ExportOutcome::Written(path))
        }
        Ok(ExportOutcome::Cancelled) => {
            info!("Export cancelled");
            Ok(ExportOutcome::Cancelled)
        }
        Err(e) => {
            error!("❌ Failed to export comments: {}", e);
            Err(e.to_string())
        }
    }
}

//! Comment Scraper Pro - Core Library
//!
//! This library provides the core functionality for the YouTube comment
//! scraper application: comment ingestion, local persistence, and CSV
//! export. The desktop window is an external collaborator that drives the
//! command handlers in [`commands`].

pub mod commands;
pub mod core;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{
    config::AppConfig,
    exporter::ExportOutcome,
    fetcher::CommentFetcher,
    models::{AppError, AppResult, Comment, FetchRequest, FetchSummary},
    pipeline::CommentPipeline,
    store::CommentStore,
};

/// Application state shared with the embedding shell
pub struct AppState {
    pub config: AppConfig,
    pub pipeline: CommentPipeline,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        let config = Self::load_or_initialize_config();
        let pipeline = CommentPipeline::from_config(&config)
            .map_err(|e| anyhow::anyhow!("Failed to create comment pipeline: {}", e))?;

        Ok(Self { config, pipeline })
    }

    fn load_or_initialize_config() -> AppConfig {
        match AppConfig::load() {
            Ok(cfg) => {
                if let Err(err) = cfg.validate() {
                    tracing::warn!(
                        "Invalid configuration detected ({}), falling back to defaults",
                        err
                    );
                    let default_cfg = AppConfig::default();
                    if let Err(save_err) = default_cfg.save() {
                        tracing::warn!("Failed to persist default configuration: {}", save_err);
                    }
                    default_cfg
                } else {
                    cfg
                }
            }
            Err(err) => {
                tracing::warn!(
                    "Failed to load configuration from disk: {}. Using defaults",
                    err
                );
                let default_cfg = AppConfig::default();
                if let Err(save_err) = default_cfg.save() {
                    tracing::warn!("Failed to persist default configuration: {}", save_err);
                }
                default_cfg
            }
        }
    }
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

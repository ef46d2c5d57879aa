//! Core data models for the comment scraper application

use serde::{Deserialize, Serialize};

/// A single top-level comment as persisted in the local store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Display name of the comment author
    pub author: String,

    /// Publish date formatted as YYYY/MM/DD
    pub published: String,

    /// Display text with HTML entities decoded
    pub text: String,
}

/// Parameters of a single comment-thread listing request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchRequest {
    pub video_id: String,

    /// Page size in [1,100]; already validated
    pub max_results: u32,
}

/// A validated comment amount, with clamping reported back to the caller
/// so the UI can reflect the corrected value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedCount {
    pub value: u32,

    pub clamped: bool,
}

/// Summary of a completed validate-and-fetch cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchSummary {
    pub video_id: String,

    /// Page size actually requested from the API
    pub max_results: u32,

    /// True when the requested amount was reduced to the page limit
    pub clamped: bool,

    /// Number of rows now in the store
    pub stored: usize,
}

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid YouTube URL")]
    InvalidUrl,

    #[error("Comment amount is not a number: '{0}'")]
    NotANumber(String),

    #[error("Comment amount must be a positive integer, got {0}")]
    NonPositive(i64),

    #[error("Malformed publish timestamp: '{0}'")]
    MalformedTimestamp(String),

    #[error("Comment fetch failed: {0}")]
    FetchFailed(String),

    #[error("Comment store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

//! YouTube comment-thread fetching
//!
//! Issues a single-page request against the Data API v3 commentThreads
//! endpoint and normalizes the response into `Comment` records. Pagination
//! beyond the first page is not attempted.

use std::time::Duration;

use chrono::NaiveDateTime;
use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::core::config::ApiConfig;
use crate::core::models::{AppError, AppResult, Comment, FetchRequest};

/// One commentThreads.list response page
#[derive(Debug, Deserialize)]
struct CommentThreadListResponse {
    /// Absent for videos without any comments
    #[serde(default)]
    items: Vec<CommentThread>,
}

#[derive(Debug, Deserialize)]
struct CommentThread {
    snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentThreadSnippet {
    top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
struct TopLevelComment {
    snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CommentSnippet {
    author_display_name: String,
    published_at: String,
    text_display: String,
}

/// Blocking client for the comment-thread listing endpoint
pub struct CommentFetcher {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl CommentFetcher {
    /// Create a fetcher from the API configuration.
    ///
    /// A missing API key is not an error here; it is reported when a fetch
    /// is actually attempted, so read-only operations stay available.
    pub fn new(api: &ApiConfig, api_key: Option<String>) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api.timeout_seconds))
            .user_agent(api.user_agent.clone())
            .build()
            .map_err(|e| AppError::FetchFailed(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: api.endpoint.clone(),
            api_key,
        })
    }

    /// Fetch one page of top-level comments, at most `max_results` items,
    /// in the order the API returns them.
    pub fn fetch_comments(&self, request: &FetchRequest) -> AppResult<Vec<Comment>> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AppError::Config(
                "No API key configured; set YOUTUBE_API_KEY or the api.api_key config entry"
                    .to_string(),
            )
        })?;

        debug!(
            "Requesting up to {} comments for video {}",
            request.max_results, request.video_id
        );

        let max_results = request.max_results.to_string();
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("part", "snippet"),
                ("videoId", request.video_id.as_str()),
                ("maxResults", max_results.as_str()),
                ("key", api_key),
            ])
            .send()
            .map_err(|e| AppError::FetchFailed(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            let detail = detail.trim();
            return Err(AppError::FetchFailed(if detail.is_empty() {
                format!("API returned status {}", status)
            } else {
                format!("API returned status {}: {}", status, detail)
            }));
        }

        let page: CommentThreadListResponse = response
            .json()
            .map_err(|e| AppError::FetchFailed(format!("Malformed API response: {}", e)))?;

        debug!("Received {} comment threads", page.items.len());

        page.items.iter().map(normalize_thread).collect()
    }
}

fn normalize_thread(thread: &CommentThread) -> AppResult<Comment> {
    let snippet = &thread.snippet.top_level_comment.snippet;

    Ok(Comment {
        author: snippet.author_display_name.clone(),
        published: format_publish_date(&snippet.published_at)?,
        text: html_escape::decode_html_entities(&snippet.text_display).into_owned(),
    })
}

/// Reformat a strict ISO8601 UTC timestamp (`YYYY-MM-DDTHH:MM:SSZ`)
/// as `YYYY/MM/DD`.
fn format_publish_date(raw: &str) -> AppResult<String> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%SZ")
        .map(|published| published.format("%Y/%m/%d").to_string())
        .map_err(|_| AppError::MalformedTimestamp(raw.to_string()))
}

//! URL and input validation utilities

use std::sync::OnceLock;

use regex::Regex;

use crate::core::models::{AppError, AppResult, BoundedCount};

/// Maximum comments the listing endpoint returns in a single page
pub const MAX_RESULTS: u32 = 100;

fn video_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[?&]v=([a-zA-Z0-9_-]+)").expect("valid video id pattern"))
}

/// Extract the `v` query parameter from a YouTube watch URL.
///
/// Short links and embed links are not recognized; a URL without an
/// explicit `v` parameter is rejected.
pub fn extract_video_id(url: &str) -> AppResult<String> {
    video_id_pattern()
        .captures(url)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str().to_string())
        .ok_or(AppError::InvalidUrl)
}

/// Parse and bound the requested comment amount.
///
/// Values above the page limit are clamped rather than rejected, and the
/// clamp is reported so the caller can reflect the corrected value.
pub fn parse_max_results(raw: &str) -> AppResult<BoundedCount> {
    let amount: i64 = raw
        .trim()
        .parse()
        .map_err(|_| AppError::NotANumber(raw.trim().to_string()))?;

    if amount <= 0 {
        return Err(AppError::NonPositive(amount));
    }

    if amount > i64::from(MAX_RESULTS) {
        Ok(BoundedCount {
            value: MAX_RESULTS,
            clamped: true,
        })
    } else {
        Ok(BoundedCount {
            value: amount as u32,
            clamped: false,
        })
    }
}

//! CSV export of the stored comment table

use std::path::PathBuf;

use csv::Writer;
use tracing::debug;

use crate::core::models::{AppError, AppResult};
use crate::core::store::CommentStore;

/// Column headers of the exported file
const CSV_HEADERS: [&str; 3] = ["User", "Time", "Comment"];

/// Outcome of an export request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// File written to the given path
    Written(PathBuf),
    /// Caller supplied no destination; nothing was written
    Cancelled,
}

/// Serialize the stored table as CSV at `path`.
///
/// `None` means the user cancelled the destination choice and is reported
/// as `Cancelled`, not as a failure. A path without an extension gets
/// `.csv` appended, matching the save dialog default.
pub fn export_csv(store: &CommentStore, path: Option<PathBuf>) -> AppResult<ExportOutcome> {
    let path = match path {
        Some(path) => path,
        None => {
            debug!("Export cancelled: no destination chosen");
            return Ok(ExportOutcome::Cancelled);
        }
    };

    let path = if path.extension().is_none() {
        path.with_extension("csv")
    } else {
        path
    };

    let comments = store.read_all()?;

    let mut writer = Writer::from_path(&path).map_err(|e| {
        AppError::ExportFailed(format!("Failed to create {}: {}", path.display(), e))
    })?;

    writer
        .write_record(CSV_HEADERS)
        .map_err(|e| AppError::ExportFailed(e.to_string()))?;

    for comment in &comments {
        writer
            .write_record([&comment.author, &comment.published, &comment.text])
            .map_err(|e| AppError::ExportFailed(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::ExportFailed(e.to_string()))?;

    debug!("Exported {} comments to {}", comments.len(), path.display());
    Ok(ExportOutcome::Written(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Comment;
    use tempfile::tempdir;

    fn seeded_store(dir: &std::path::Path, comments: &[Comment]) -> CommentStore {
        let store = CommentStore::new(dir.join("comments.db"));
        store.replace_all(comments).unwrap();
        store
    }

    fn plain_comment(author: &str, text: &str) -> Comment {
        Comment {
            author: author.to_string(),
            published: "2023/05/01".to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_header_line_and_row_count() {
        let dir = tempdir().unwrap();
        let store = seeded_store(
            dir.path(),
            &[plain_comment("alice", "one"), plain_comment("bob", "two")],
        );

        let out = dir.path().join("export.csv");
        let outcome = export_csv(&store, Some(out.clone())).unwrap();
        assert_eq!(outcome, ExportOutcome::Written(out.clone()));

        let content = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "User,Time,Comment");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_fields_are_quoted_and_round_trip() {
        let dir = tempdir().unwrap();
        let tricky = plain_comment("a,b \"c\"", "line one\nline two, with comma");
        let store = seeded_store(dir.path(), &[tricky.clone()]);

        let out = dir.path().join("export.csv");
        export_csv(&store, Some(out.clone())).unwrap();

        let mut reader = csv::Reader::from_path(&out).unwrap();
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(&record[0], tricky.author.as_str());
        assert_eq!(&record[1], tricky.published.as_str());
        assert_eq!(&record[2], tricky.text.as_str());
    }

    #[test]
    fn test_empty_store_exports_header_only() {
        let dir = tempdir().unwrap();
        let store = seeded_store(dir.path(), &[]);

        let out = dir.path().join("export.csv");
        export_csv(&store, Some(out.clone())).unwrap();

        let content = std::fs::read_to_string(&out).unwrap();
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_missing_path_is_a_cancellation() {
        let dir = tempdir().unwrap();
        let store = seeded_store(dir.path(), &[plain_comment("alice", "one")]);

        assert_eq!(export_csv(&store, None).unwrap(), ExportOutcome::Cancelled);
    }

    #[test]
    fn test_extensionless_path_gets_csv_appended() {
        let dir = tempdir().unwrap();
        let store = seeded_store(dir.path(), &[plain_comment("alice", "one")]);

        let outcome = export_csv(&store, Some(dir.path().join("export"))).unwrap();
        assert_eq!(
            outcome,
            ExportOutcome::Written(dir.path().join("export.csv"))
        );
        assert!(dir.path().join("export.csv").exists());
    }

    #[test]
    fn test_unwritable_destination_reports_export_failed() {
        let dir = tempdir().unwrap();
        let store = seeded_store(dir.path(), &[plain_comment("alice", "one")]);

        let out = dir.path().join("missing").join("export.csv");
        assert!(matches!(
            export_csv(&store, Some(out)),
            Err(AppError::ExportFailed(_))
        ));
    }
}

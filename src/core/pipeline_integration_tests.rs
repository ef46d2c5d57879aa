//! Pipeline integration tests
//!
//! Exercises the validate → fetch → store wiring against a temporary
//! database, without touching the network: every scenario here fails
//! validation or stays on the read/export side.

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tempfile::tempdir;

    use crate::core::config::ApiConfig;
    use crate::core::exporter::ExportOutcome;
    use crate::core::fetcher::CommentFetcher;
    use crate::core::models::{AppError, Comment};
    use crate::core::pipeline::CommentPipeline;
    use crate::core::store::CommentStore;

    fn pipeline_at(dir: &Path) -> CommentPipeline {
        let fetcher = CommentFetcher::new(&ApiConfig::default(), Some("test-key".into())).unwrap();
        CommentPipeline::new(fetcher, CommentStore::new(dir.join("comments.db")))
    }

    fn seed(dir: &Path) -> Vec<Comment> {
        let comments = vec![
            Comment {
                author: "alice".to_string(),
                published: "2023/05/01".to_string(),
                text: "kept across failed fetches".to_string(),
            },
            Comment {
                author: "bob".to_string(),
                published: "2023/05/02".to_string(),
                text: "me too".to_string(),
            },
        ];

        CommentStore::new(dir.join("comments.db"))
            .replace_all(&comments)
            .unwrap();
        comments
    }

    #[test]
    fn test_invalid_url_leaves_store_untouched() {
        let dir = tempdir().unwrap();
        let seeded = seed(dir.path());
        let pipeline = pipeline_at(dir.path());

        let result = pipeline.validate_and_fetch("not-a-url", "10");
        assert!(matches!(result, Err(AppError::InvalidUrl)));

        assert_eq!(pipeline.list_stored_comments().unwrap(), seeded);
    }

    #[test]
    fn test_amount_is_validated_before_the_url() {
        let dir = tempdir().unwrap();
        let pipeline = pipeline_at(dir.path());

        // Both inputs are invalid; the amount error wins
        let result = pipeline.validate_and_fetch("not-a-url", "ten");
        assert!(matches!(result, Err(AppError::NotANumber(_))));
    }

    #[test]
    fn test_clamping_happens_before_url_rejection() {
        let dir = tempdir().unwrap();
        let seeded = seed(dir.path());
        let pipeline = pipeline_at(dir.path());

        // "150" is clamped, not rejected, so the URL check is what fails
        let result = pipeline.validate_and_fetch("not-a-url", "150");
        assert!(matches!(result, Err(AppError::InvalidUrl)));

        assert_eq!(pipeline.list_stored_comments().unwrap(), seeded);
    }

    #[test]
    fn test_non_positive_amount_leaves_store_untouched() {
        let dir = tempdir().unwrap();
        let seeded = seed(dir.path());
        let pipeline = pipeline_at(dir.path());

        let result = pipeline.validate_and_fetch("https://youtube.com/watch?v=abc123", "0");
        assert!(matches!(result, Err(AppError::NonPositive(0))));

        assert_eq!(pipeline.list_stored_comments().unwrap(), seeded);
    }

    #[test]
    fn test_list_on_fresh_pipeline_is_empty() {
        let dir = tempdir().unwrap();
        let pipeline = pipeline_at(dir.path());

        assert!(pipeline.list_stored_comments().unwrap().is_empty());
    }

    #[test]
    fn test_export_round_trip_over_stored_table() {
        let dir = tempdir().unwrap();
        let seeded = seed(dir.path());
        let pipeline = pipeline_at(dir.path());

        let out = dir.path().join("export.csv");
        let outcome = pipeline.export_to(Some(out.clone())).unwrap();
        assert_eq!(outcome, ExportOutcome::Written(out.clone()));

        let content = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines[0], "User,Time,Comment");
        assert_eq!(lines.len(), seeded.len() + 1);
    }

    #[test]
    fn test_export_without_destination_is_cancelled() {
        let dir = tempdir().unwrap();
        seed(dir.path());
        let pipeline = pipeline_at(dir.path());

        assert_eq!(pipeline.export_to(None).unwrap(), ExportOutcome::Cancelled);
    }
}

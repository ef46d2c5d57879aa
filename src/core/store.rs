//! Local comment persistence
//!
//! A single SQLite table with full-replace semantics: each successful fetch
//! overwrites the previous table contents entirely, so the store never holds
//! a union of multiple fetches.

use std::path::PathBuf;

use rusqlite::{params, Connection};
use tracing::debug;

use crate::core::models::{AppError, AppResult, Comment};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS comments (
    user TEXT NOT NULL,
    time TEXT NOT NULL,
    comment TEXT NOT NULL
)";

/// Comment store backed by a single SQLite table.
///
/// A fresh connection is opened per operation and released on every exit
/// path. The table carries no primary key; rows read back in insertion
/// order.
pub struct CommentStore {
    db_path: PathBuf,
}

impl CommentStore {
    pub fn new<P: Into<PathBuf>>(db_path: P) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    fn open(&self) -> AppResult<Connection> {
        Connection::open(&self.db_path).map_err(|e| {
            AppError::StoreUnavailable(format!(
                "Failed to open {}: {}",
                self.db_path.display(),
                e
            ))
        })
    }

    /// Replace the entire table contents with `comments`.
    ///
    /// Runs in one transaction, so a reader observes either the previous
    /// rows or the complete new set, never a partial table.
    pub fn replace_all(&self, comments: &[Comment]) -> AppResult<()> {
        let mut conn = self.open()?;

        let tx = conn.transaction().map_err(store_err)?;
        tx.execute(CREATE_TABLE_SQL, []).map_err(store_err)?;
        tx.execute("DELETE FROM comments", []).map_err(store_err)?;

        {
            let mut insert = tx
                .prepare("INSERT INTO comments (user, time, comment) VALUES (?1, ?2, ?3)")
                .map_err(store_err)?;

            for comment in comments {
                insert
                    .execute(params![comment.author, comment.published, comment.text])
                    .map_err(store_err)?;
            }
        }

        tx.commit().map_err(store_err)?;

        debug!("Replaced comment table with {} rows", comments.len());
        Ok(())
    }

    /// Read the full table in insertion order. A store that has never been
    /// written reads back as empty.
    pub fn read_all(&self) -> AppResult<Vec<Comment>> {
        let conn = self.open()?;
        conn.execute(CREATE_TABLE_SQL, []).map_err(store_err)?;

        let mut select = conn
            .prepare("SELECT user, time, comment FROM comments ORDER BY rowid")
            .map_err(store_err)?;

        let rows = select
            .query_map([], |row| {
                Ok(Comment {
                    author: row.get(0)?,
                    published: row.get(1)?,
                    text: row.get(2)?,
                })
            })
            .map_err(store_err)?;

        rows.collect::<Result<Vec<_>, _>>().map_err(store_err)
    }
}

fn store_err(e: rusqlite::Error) -> AppError {
    AppError::StoreUnavailable(e.to_string())
}

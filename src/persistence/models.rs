//! Database row models for the `comments` table.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::{Comment, CommentId};

/// A row of the `comments` table as returned by `SELECT`/`RETURNING`.
#[derive(Debug, Clone, FromRow)]
pub struct CommentRow {
    /// Auto-increment row ID.
    pub id: i64,
    /// Author name.
    pub name: String,
    /// Comment body.
    pub text: String,
    /// Insert timestamp.
    pub created: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated: DateTime<Utc>,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Self {
            id: CommentId::new(row.id),
            name: row.name,
            text: row.text,
            created: row.created,
            updated: row.updated,
        }
    }
}

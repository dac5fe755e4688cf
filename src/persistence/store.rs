//! Comment reads and writes.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use super::models::CommentRow;
use crate::domain::{Comment, ValidCandidate};
use crate::error::BoardError;

const LIST_RECENT_SQL: &str = "SELECT id, name, text, created, updated FROM comments \
     ORDER BY created DESC, id DESC LIMIT ?";

const INSERT_SQL: &str = "INSERT INTO comments (name, text, created, updated) \
     VALUES (?, ?, ?, ?) RETURNING id, name, text, created, updated";

/// SQLite-backed comment store.
///
/// Holds a clone of the process-wide pool handed out by
/// [`super::Database::comment_store`]. Concurrent callers are serialized
/// by SQLite's own locking; each operation is a single statement, so a
/// reader sees a committed row in full or not at all.
#[derive(Debug, Clone)]
pub struct CommentStore {
    pool: SqlitePool,
}

impl CommentStore {
    /// Creates a store over the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Returns at most `limit` comments, newest first.
    ///
    /// Rows with equal `created` are ordered by descending id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] on database failure.
    pub async fn list_recent(&self, limit: u32) -> Result<Vec<Comment>, BoardError> {
        let rows = sqlx::query_as::<_, CommentRow>(LIST_RECENT_SQL)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }

    /// Persists a validated candidate stamped with the current time and
    /// returns the stored row, including its new id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] on database failure; no row is
    /// written in that case.
    pub async fn create(&self, candidate: &ValidCandidate) -> Result<Comment, BoardError> {
        self.insert_at(candidate, Utc::now()).await
    }

    /// Inserts with an explicit timestamp for both `created` and `updated`.
    pub(crate) async fn insert_at(
        &self,
        candidate: &ValidCandidate,
        now: DateTime<Utc>,
    ) -> Result<Comment, BoardError> {
        let row = sqlx::query_as::<_, CommentRow>(INSERT_SQL)
            .bind(candidate.name())
            .bind(candidate.text())
            .bind(now)
            .bind(now)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.into())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::collections::HashSet;

    use chrono::{Duration, TimeZone};
    use tokio_test::assert_ok;

    use super::*;
    use crate::domain::{CommentCandidate, CommentId, validate};
    use crate::persistence::Database;

    async fn make_store() -> CommentStore {
        let Ok(db) = Database::in_memory().await else {
            panic!("database open failed");
        };
        db.comment_store()
    }

    fn valid(name: &str, text: &str) -> ValidCandidate {
        let Ok(candidate) = validate(CommentCandidate::new(name, text)) else {
            panic!("candidate should be valid");
        };
        candidate
    }

    #[tokio::test]
    async fn empty_table_lists_nothing() {
        let store = make_store().await;
        let comments = assert_ok!(store.list_recent(10).await);
        assert!(comments.is_empty());
    }

    #[tokio::test]
    async fn create_then_list_returns_the_row() {
        let store = make_store().await;

        let created = assert_ok!(store.create(&valid("Alice", "hello")).await);
        assert_eq!(created.id, CommentId::new(1));
        assert_eq!(created.created, created.updated);

        let comments = assert_ok!(store.list_recent(10).await);
        assert_eq!(comments, vec![created]);
        let Some(first) = comments.first() else {
            panic!("expected one comment");
        };
        assert_eq!(first.name, "Alice");
        assert_eq!(first.text, "hello");
    }

    #[tokio::test]
    async fn list_recent_keeps_newest_ten_in_descending_order() {
        let store = make_store().await;
        let Some(base) = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).single() else {
            panic!("valid timestamp");
        };

        for i in 0..15 {
            let at = base + Duration::seconds(i);
            assert_ok!(
                store
                    .insert_at(&valid("bot", &format!("comment {i}")), at)
                    .await
            );
        }

        let comments = assert_ok!(store.list_recent(10).await);
        assert_eq!(comments.len(), 10);
        assert!(comments.windows(2).all(|w| match w {
            [newer, older] => newer.created >= older.created,
            _ => false,
        }));
        let texts: Vec<&str> = comments.iter().map(|c| c.text.as_str()).collect();
        let expected: Vec<String> = (5..15).rev().map(|i| format!("comment {i}")).collect();
        assert_eq!(texts, expected);
    }

    #[tokio::test]
    async fn sub_second_timestamps_order_correctly() {
        let store = make_store().await;
        let Some(base) = Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).single() else {
            panic!("valid timestamp");
        };

        assert_ok!(store.insert_at(&valid("a", "whole second"), base).await);
        assert_ok!(
            store
                .insert_at(&valid("b", "later"), base + Duration::milliseconds(250))
                .await
        );
        assert_ok!(
            store
                .insert_at(&valid("c", "latest"), base + Duration::microseconds(250_001))
                .await
        );

        let comments = assert_ok!(store.list_recent(10).await);
        let texts: Vec<&str> = comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["latest", "later", "whole second"]);
    }

    #[tokio::test]
    async fn repeated_reads_are_stable() {
        let store = make_store().await;
        for i in 0..3 {
            assert_ok!(store.create(&valid("carol", &format!("note {i}"))).await);
        }
        let first = assert_ok!(store.list_recent(10).await);
        let second = assert_ok!(store.list_recent(10).await);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn limit_truncates() {
        let store = make_store().await;
        for i in 0..4 {
            assert_ok!(store.create(&valid("dave", &format!("n{i}"))).await);
        }
        assert_eq!(assert_ok!(store.list_recent(2).await).len(), 2);
        assert!(assert_ok!(store.list_recent(0).await).is_empty());
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let store = make_store().await;
        let a = store.clone();
        let b = store.clone();

        let (left, right) = tokio::join!(
            async move { a.create(&valid("left", "one")).await },
            async move { b.create(&valid("right", "two")).await },
        );
        let left = assert_ok!(left);
        let right = assert_ok!(right);
        assert_ne!(left.id, right.id);

        let comments = assert_ok!(store.list_recent(10).await);
        assert_eq!(comments.len(), 2);
        let ids: HashSet<CommentId> = comments.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 2);
    }

    #[tokio::test]
    async fn ids_are_strictly_increasing() {
        let store = make_store().await;
        let first = assert_ok!(store.create(&valid("e", "1")).await);
        let second = assert_ok!(store.create(&valid("e", "2")).await);
        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn oversized_row_is_rejected_by_table_checks() {
        let store = make_store().await;
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO comments (name, text, created, updated) VALUES (?, ?, ?, ?)",
        )
        .bind("x")
        .bind("t".repeat(400))
        .bind(now)
        .bind(now)
        .execute(&store.pool)
        .await;
        assert!(result.is_err());
        assert!(assert_ok!(store.list_recent(10).await).is_empty());
    }
}

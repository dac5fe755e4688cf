//! Comment service: validation in front of the store.

use crate::domain::{Comment, CommentCandidate, validate};
use crate::error::BoardError;
use crate::persistence::CommentStore;

/// Orchestration layer for comment operations.
///
/// Stateless coordinator over a [`CommentStore`]. Submissions are checked
/// by [`validate`] first; a candidate that fails validation never reaches
/// the store.
#[derive(Debug, Clone)]
pub struct CommentService {
    store: CommentStore,
    recent_limit: u32,
}

impl CommentService {
    /// Creates a new `CommentService` listing at most `recent_limit`
    /// comments.
    #[must_use]
    pub fn new(store: CommentStore, recent_limit: u32) -> Self {
        Self {
            store,
            recent_limit,
        }
    }

    /// Returns a reference to the inner [`CommentStore`].
    #[must_use]
    pub fn store(&self) -> &CommentStore {
        &self.store
    }

    /// Number of comments [`Self::recent`] returns at most.
    #[must_use]
    pub const fn recent_limit(&self) -> u32 {
        self.recent_limit
    }

    /// Lists the most recent comments, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Storage`] if the read fails.
    pub async fn recent(&self) -> Result<Vec<Comment>, BoardError> {
        self.store
            .list_recent(self.recent_limit)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "listing comments failed"))
    }

    /// Validates and persists a new comment.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Validation`] if the candidate violates a field
    /// constraint (storage untouched), or [`BoardError::Storage`] if the
    /// insert fails.
    pub async fn submit(&self, candidate: CommentCandidate) -> Result<Comment, BoardError> {
        let valid = validate(candidate).inspect_err(|e| {
            tracing::warn!(violations = %e, "comment rejected");
        })?;

        let comment = self
            .store
            .create(&valid)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "storing comment failed"))?;

        tracing::info!(id = %comment.id, "comment created");
        Ok(comment)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::CommentId;
    use crate::domain::candidate::{DEFAULT_NAME, Field, TEXT_MAX_LEN};
    use crate::persistence::Database;

    async fn make_service(limit: u32) -> CommentService {
        let Ok(db) = Database::in_memory().await else {
            panic!("database open failed");
        };
        CommentService::new(db.comment_store(), limit)
    }

    #[tokio::test]
    async fn alice_scenario() {
        let service = make_service(10).await;
        let Ok(before) = service.recent().await else {
            panic!("list failed");
        };
        assert!(before.is_empty());

        let Ok(created) = service
            .submit(CommentCandidate::new("Alice", "hello"))
            .await
        else {
            panic!("submit failed");
        };

        let Ok(after) = service.recent().await else {
            panic!("list failed");
        };
        assert_eq!(after.len(), 1);
        let Some(row) = after.first() else {
            panic!("expected a row");
        };
        assert_eq!(row.id, CommentId::new(1));
        assert_eq!(row.name, "Alice");
        assert_eq!(row.text, "hello");
        assert_eq!(row.created, row.updated);
        assert_eq!(row, &created);
    }

    #[tokio::test]
    async fn empty_name_is_rejected_without_touching_storage() {
        let service = make_service(10).await;
        let result = service.submit(CommentCandidate::new("", "x")).await;
        let Err(BoardError::Validation(errors)) = result else {
            panic!("expected validation failure");
        };
        assert!(errors.has_field(Field::Name));

        let Ok(rows) = service.recent().await else {
            panic!("list failed");
        };
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn oversized_text_is_validation_not_storage_failure() {
        let service = make_service(10).await;
        let text = "x".repeat(TEXT_MAX_LEN + 1);
        let result = service.submit(CommentCandidate::new("Bob", text)).await;
        assert!(matches!(result, Err(BoardError::Validation(_))));
    }

    #[tokio::test]
    async fn omitted_name_is_stored_as_placeholder() {
        let service = make_service(10).await;
        let candidate = CommentCandidate {
            name: None,
            text: Some("anonymous".to_string()),
        };
        let Ok(comment) = service.submit(candidate).await else {
            panic!("submit failed");
        };
        assert_eq!(comment.name, DEFAULT_NAME);
    }

    #[tokio::test]
    async fn recent_honours_configured_limit() {
        let service = make_service(3).await;
        for i in 0..5 {
            let result = service
                .submit(CommentCandidate::new("eve", format!("msg {i}")))
                .await;
            assert!(result.is_ok());
        }
        let Ok(rows) = service.recent().await else {
            panic!("list failed");
        };
        assert_eq!(rows.len(), 3);
        assert_eq!(service.recent_limit(), 3);
    }
}

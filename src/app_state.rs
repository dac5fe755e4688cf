//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::CommentService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Comment service for listing and creating comments.
    pub comment_service: Arc<CommentService>,
}

impl AppState {
    /// Wraps a service in shared state.
    #[must_use]
    pub fn new(comment_service: CommentService) -> Self {
        Self {
            comment_service: Arc::new(comment_service),
        }
    }
}

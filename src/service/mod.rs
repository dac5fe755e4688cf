//! Service layer: business logic orchestration.
//!
//! [`CommentService`] validates submitted candidates and delegates reads
//! and writes to the [`crate::persistence::CommentStore`].

pub mod comment_service;

pub use comment_service::CommentService;

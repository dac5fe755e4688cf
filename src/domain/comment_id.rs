//! Type-safe comment identifier.
//!
//! [`CommentId`] is a newtype wrapper around the `i64` row id SQLite assigns
//! to every inserted comment, so that comment ids cannot be confused with
//! limits, counts or other integers.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a persisted comment.
///
/// Assigned by the database on insert (`AUTOINCREMENT`), strictly
/// increasing and never reused, immutable thereafter.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct CommentId(i64);

impl CommentId {
    /// Wraps a raw row id.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw row id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CommentId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<CommentId> for i64 {
    fn from(id: CommentId) -> Self {
        id.0
    }
}

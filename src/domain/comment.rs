//! The persisted comment entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::CommentId;

/// A single posted comment as stored in the `comments` table.
///
/// Created only through [`crate::persistence::CommentStore::create`]; never
/// updated or deleted by any exposed operation. `updated` is set equal to
/// `created` on insert and is reserved for a future edit path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    /// Database-assigned identifier.
    pub id: CommentId,
    /// Author name (at most 200 characters).
    pub name: String,
    /// Comment body (at most 399 characters).
    pub text: String,
    /// Creation timestamp.
    pub created: DateTime<Utc>,
    /// Last modification timestamp; never earlier than `created`.
    pub updated: DateTime<Utc>,
}

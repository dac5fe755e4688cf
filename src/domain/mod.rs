//! Domain layer: the comment entity, candidate validation and the table
//! descriptor the schema initializer consumes.

pub mod candidate;
pub mod comment;
pub mod comment_id;
pub mod schema;

pub use candidate::{CommentCandidate, ValidCandidate, ValidationErrors, Violation, validate};
pub use comment::Comment;
pub use comment_id::CommentId;
pub use schema::{COMMENTS_TABLE, TableDescriptor};

//! Persistence layer: SQLite-backed comment storage.
//!
//! [`Database`] owns the connection pool for the lifetime of the process
//! and guarantees the `comments` table exists before anything else runs.
//! [`CommentStore`] reads and writes comment rows through a clone of that
//! pool.

pub mod database;
pub mod models;
pub mod store;

pub use database::{Database, ensure_schema};
pub use store::CommentStore;

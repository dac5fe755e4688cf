//! # comment-board
//!
//! Minimal comment board: lists the most recent comments and accepts new
//! ones over a small REST API, with SQLite as the backing store.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)        static files (ServeDir fallback)
//!     │
//!     ├── CommentService (service/)   validation → store
//!     │
//!     ├── CommentStore (persistence/)
//!     ├── Database + schema initializer (persistence/, domain/schema)
//!     │
//!     └── SQLite
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;

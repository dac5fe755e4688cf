//! Data Transfer Objects for REST request/response serialization.

pub mod comment_dto;

pub use comment_dto::*;

//! Comment request DTOs.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::CommentCandidate;

/// Request body for `POST /api/comments`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    /// Author name (max 200 chars). Omit to post as `noname`.
    #[serde(default)]
    pub name: Option<String>,
    /// Comment body (1 to 399 chars).
    #[serde(default)]
    pub text: Option<String>,
}

impl From<CreateCommentRequest> for CommentCandidate {
    fn from(req: CreateCommentRequest) -> Self {
        Self {
            name: req.name,
            text: req.text,
        }
    }
}

//! Comment handlers: list recent, create.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::CreateCommentRequest;
use crate::app_state::AppState;
use crate::domain::Comment;
use crate::error::{BoardError, ErrorResponse};

/// `GET /api/comments` — The most recent comments, newest first.
///
/// # Errors
///
/// Returns [`BoardError::Storage`] if the database read fails.
#[utoipa::path(
    get,
    path = "/api/comments",
    tag = "Comments",
    summary = "List recent comments",
    description = "Returns at most the configured number of comments (10 by default), ordered by creation time descending.",
    responses(
        (status = 200, description = "Recent comments", body = Vec<Comment>),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn list_comments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, BoardError> {
    let comments = state.comment_service.recent().await?;
    Ok(Json(comments))
}

/// `POST /api/comments` — Validate and store a new comment.
///
/// # Errors
///
/// Returns [`BoardError::InvalidRequest`] for an unreadable body,
/// [`BoardError::Validation`] for field violations and
/// [`BoardError::Storage`] if the insert fails.
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = "Comments",
    summary = "Post a comment",
    description = "Validates `name` (optional, 1 to 200 chars) and `text` (1 to 399 chars), stores the comment and returns it with its assigned id and timestamps.",
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created", body = Comment),
        (status = 400, description = "Invalid body or field violations", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn create_comment(
    State(state): State<AppState>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, BoardError> {
    let Json(req) = payload.map_err(|rejection| BoardError::InvalidRequest(rejection.body_text()))?;

    let comment = state.comment_service.submit(req.into()).await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// Comment routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/comments", get(list_comments).post(create_comment))
}

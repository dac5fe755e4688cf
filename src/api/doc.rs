//! OpenAPI documentation for the REST API.
//!
//! Served through Swagger UI at `/swagger-ui` when the `swagger-ui`
//! feature is enabled; the raw document lives at `/api-docs/openapi.json`.

use utoipa::OpenApi;

use super::handlers;

/// OpenAPI document for the REST API.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "comment-board API",
        description = "Lists recent comments and accepts new ones."
    ),
    paths(
        handlers::comments::list_comments,
        handlers::comments::create_comment,
        handlers::system::root_handler,
        handlers::system::health_handler,
    ),
    tags(
        (name = "Comments", description = "Listing and posting comments"),
        (name = "System", description = "Greeting and health probes")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_comment_endpoints() {
        let doc = ApiDoc::openapi();
        let Some(item) = doc.paths.paths.get("/api/comments") else {
            panic!("comments path missing");
        };
        assert!(item.get.is_some());
        assert!(item.post.is_some());
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn comment_schema_is_registered() {
        let doc = ApiDoc::openapi();
        let Some(components) = doc.components else {
            panic!("components missing");
        };
        assert!(components.schemas.contains_key("Comment"));
        assert!(components.schemas.contains_key("ErrorResponse"));
    }
}

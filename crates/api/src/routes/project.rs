//! URL table for the `/projects` resource.
//!
//! The review-request endpoint lives here too: it is a project operation,
//! addressed by `projectID` in the body rather than the path.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{project, review_request};
use crate::state::AppState;

/// Everything nested under `/projects`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// PUT    /{project_id}    -> update
/// DELETE /{project_id}    -> delete
///
/// POST   /review-request  -> review_request::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/review-request", post(review_request::create))
        .route(
            "/{project_id}",
            put(project::update).delete(project::delete),
        )
}

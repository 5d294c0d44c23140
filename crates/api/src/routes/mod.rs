pub mod health;
pub mod project;
pub mod shop_items;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                 list, create (session)
/// /projects/{projectID}     update, delete (session)
/// /projects/review-request  submit a review request (session)
///
/// /users/me/shells          shell balance and progress (session)
///
/// /admin/shop-items         list, create (admin only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Project CRUD plus the review-request flow.
        .nest("/projects", project::router())
        // Per-user shell balance and progress.
        .nest("/users", users::router())
        // Admin-only shop catalogue management.
        .nest("/admin/shop-items", shop_items::router())
}

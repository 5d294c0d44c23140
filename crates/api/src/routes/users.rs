//! URL table for the `/users` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::shells;
use crate::state::AppState;

/// Everything nested under `/users`.
///
/// ```text
/// GET /me/shells  -> shells::get_shells
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/me/shells", get(shells::get_shells))
}

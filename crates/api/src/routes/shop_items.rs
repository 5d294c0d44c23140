//! URL table for the admin shop-item catalogue.

use axum::routing::get;
use axum::Router;

use crate::handlers::shop_items;
use crate::state::AppState;

/// Everything nested under `/admin/shop-items`. Both handlers require the admin
/// role through their extractor.
///
/// ```text
/// GET  /  -> list
/// POST /  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(shop_items::list).post(shop_items::create))
}

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body returned by `GET /health`.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"` when the database answers, `"degraded"` otherwise.
    pub status: &'static str,
    /// Version of this crate, from Cargo.toml.
    pub version: &'static str,
    /// Result of the database ping.
    pub db_healthy: bool,
}

/// GET /health -- liveness plus a database ping.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = shipwrecked_db::health_check(&state.pool).await.is_ok();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

/// Health routes live at the root, not under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

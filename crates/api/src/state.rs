use std::sync::Arc;

use crate::config::ServerConfig;

/// State shared by every handler through Axum's `State` extractor.
///
/// Cloning is cheap: the pool is internally reference-counted and the
/// config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Postgres connection pool.
    pub pool: shipwrecked_db::DbPool,
    /// Server configuration (shell rate, timeouts, CORS).
    pub config: Arc<ServerConfig>,
}

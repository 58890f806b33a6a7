use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable and read-only after startup: the only shared
/// pieces are the connection pool and the immutable server configuration.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tabla_db::DbPool,
    /// Server configuration (including the JWT signing secret).
    pub config: Arc<ServerConfig>,
}

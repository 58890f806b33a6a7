pub mod auth;
pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health               health check (public)
///
/// /auth/register        register (public)
/// /auth/login           login (public)
/// /auth/users           list users (public)
///
/// /notes                list (optional auth), create (requires auth)
/// /notes/{id}           update, delete (require auth)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/auth", auth::router())
        .nest("/notes", notes::router())
}

//! Health check route, reporting service liveness and database size.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    database_size_bytes: i64,
}

async fn health_check(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    let (database_size_bytes,): (i64,) =
        sqlx::query_as("SELECT pg_database_size(current_database())")
            .fetch_one(&state.pool)
            .await?;

    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        database_size_bytes,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

//! Health Check Route
//!
//! Public, no auth. Lets an operator tell "server down" from "queue
//! empty" when a store reports nothing has printed for a long stretch.

use std::sync::OnceLock;
use std::time::SystemTime;

use axum::{Json, Router, extract::State, routing::get};
use shared::api::HealthStatus;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

// Server start time (set on first probe)
static START_TIME: OnceLock<SystemTime> = OnceLock::new();

fn uptime_secs() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Liveness probe with a database round-trip.
pub async fn health(State(state): State<ServerState>) -> Json<HealthStatus> {
    let database = sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(state.pool())
        .await
        .is_ok();

    let status = if database { "healthy" } else { "degraded" };

    Json(HealthStatus {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: uptime_secs(),
        database,
    })
}

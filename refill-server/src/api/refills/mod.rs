//! Refill Queue API Module
//!
//! The three operations the pipeline runs on: patients submit, agents poll
//! their store's pending queue, agents ack after the label is on paper.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/refills", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::submit))
        .route("/pending/{store_id}", get(handler::pending))
        .route("/{id}/printed", post(handler::ack_printed))
}

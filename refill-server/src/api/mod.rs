//! API Route Modules
//!
//! # Structure
//!
//! - [`refills`] - submission, pending queue, ack
//! - [`stores`] - store directory (read-only)
//! - [`health`] - liveness probe with a database round-trip

pub mod health;
pub mod refills;
pub mod stores;

use axum::Router;
use http::{HeaderName, HeaderValue, Request};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

/// Request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).ok()?))
    }
}

/// Build a router with all routes registered (no middleware, no state).
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(refills::router())
        .merge(stores::router())
        .merge(health::router())
}

/// Build the fully configured application: routes, middleware, state.
///
/// The HTTP server serves this directly; tests drive it with `oneshot`.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // CORS - the public form posts from a separate static origin
        .layer(CorsLayer::permissive())
        // Request tracing
        .layer(TraceLayer::new_for_http())
        // Generate and propagate x-request-id
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
        .with_state(state)
}

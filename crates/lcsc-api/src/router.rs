//! Route definitions.
//!
//! Every download route is mounted twice: bare (identifier in the query
//! string) and with a trailing `{lcsc_id}` segment.

use axum::{Router, middleware as axum_middleware, routing::get};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with all routes, threading `AppState` through them.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index::index))
        .route("/health", get(handlers::health::health))
        .merge(export_routes())
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Symbol, footprint, STEP and bundle downloads
fn export_routes() -> Router<AppState> {
    Router::new()
        .route("/get_symbol", get(handlers::export::get_symbol))
        .route("/get_symbol/{lcsc_id}", get(handlers::export::get_symbol))
        .route("/get_footprint", get(handlers::export::get_footprint))
        .route(
            "/get_footprint/{lcsc_id}",
            get(handlers::export::get_footprint),
        )
        .route("/get_step", get(handlers::export::get_step))
        .route("/get_step/{lcsc_id}", get(handlers::export::get_step))
        .route("/get_all", get(handlers::export::get_all))
        .route("/get_all/{lcsc_id}", get(handlers::export::get_all))
}

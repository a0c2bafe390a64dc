//! Ticket intake service.
//!
//! Two independent endpoints: `POST /tickets` writes a new ticket record to the
//! record store, `POST /tickets/submit` forwards a ticket message to the queue.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::models::ticketsystem::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::healthz))
        .route("/tickets", post(handlers::create_ticket))
        .route("/tickets/submit", post(handlers::submit_ticket))
        // Oversized messages must reach the handlers to get the JSON 400.
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! HTTP server module.
//!
//! Provides the JSON API: route discovery, date/time conversion and
//! the user registry endpoints.

pub mod datetime;
mod middleware;
pub mod routes;
pub mod users;

pub use middleware::create_trace_layer;
pub use routes::{AppState, create_router};

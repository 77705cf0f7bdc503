//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    Router,
    response::{IntoResponse, Json},
    routing::{get, post},
};
use jiff::tz::TimeZone;
use quack_registry::Registry;

use super::{create_trace_layer, datetime, users};
use crate::error::{Result, ServerError};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    /// Zone used to interpret "local time"
    pub time_zone: TimeZone,
}

impl AppState {
    pub fn new(registry: Arc<Registry>, time_zone: TimeZone) -> Self {
        Self {
            registry,
            time_zone,
        }
    }
}

/// Create the main router with all routes.
///
/// Every endpoint is reachable under both naming schemes, e.g.
/// `/users/get_all` and `/get_users`, over the same registry.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/datetime/now", get(datetime::now))
        .route("/get_datetime", get(datetime::now))
        .route("/datetime/from_unix", get(datetime::from_unix))
        .route("/users/get_all", get(users::get_all))
        .route("/get_users", get(users::get_all))
        .route("/user/get", get(users::get))
        .route("/get_user", get(users::get_verbatim))
        .route("/user/add", post(users::add))
        .route("/add_user", post(users::add))
        .layer(create_trace_layer())
        .with_state(state)
}

/// Query string parameters of a request, in the order they were sent.
pub type Params = Vec<(String, String)>;

/// Fetch a required query parameter. When a key repeats, the first value
/// is used; an empty value counts as missing.
pub(crate) fn required<'a>(params: &'a Params, key: &str) -> Result<&'a str> {
    match params.iter().find(|(k, _)| k == key) {
        Some((_, value)) if !value.is_empty() => Ok(value.as_str()),
        _ => Err(ServerError::MissingParameters),
    }
}

/// Root endpoint: describes the available routes.
async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Quack! It works!",
        "routes": {
            "datetime": {
                "now": {
                    "methods": ["GET"],
                    "params": null
                },
                "from_unix": {
                    "methods": ["GET"],
                    "params": {
                        "timestamp": "float"
                    }
                }
            },
            "users": {
                "get_all": {
                    "methods": ["GET"],
                    "params": null
                }
            },
            "user": {
                "get": {
                    "methods": ["GET"],
                    "params": {
                        "name": "str"
                    }
                },
                "add": {
                    "methods": ["POST"],
                    "params": {
                        "name": "str",
                        "password": "str"
                    }
                }
            }
        }
    }))
}

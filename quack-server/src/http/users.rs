//! User registry endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use quack_registry::{UserRecord, user_key};
use serde::Serialize;
use tracing::info;

use super::routes::{AppState, Params, required};
use crate::error::{MessageResponse, Result, ServerError};

/// List users response.
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub users: Vec<String>,
    pub total: usize,
}

/// Single user response. `status` and `created_at` are always present,
/// as `null` when unset.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub name: String,
    pub display_name: String,
    pub status: Option<String>,
    pub created_at: Option<String>,
}

impl UserResponse {
    fn new(name: String, record: UserRecord) -> Self {
        Self {
            name,
            display_name: record.display_name,
            status: record.status,
            created_at: record.created_at,
        }
    }
}

/// List all registered users.
pub async fn get_all(State(state): State<AppState>) -> impl IntoResponse {
    let users = state.registry.list_users();
    let total = users.len();
    Json(UsersResponse { users, total })
}

/// Get a user; the `name` field echoes the lower-cased query.
pub async fn get(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Json<UserResponse>> {
    let name = required(&params, "name")?;
    let record = state
        .registry
        .get_user(name)
        .ok_or(ServerError::UserNotFound)?;
    Ok(Json(UserResponse::new(user_key(name), record)))
}

/// Get a user; the `name` field echoes the query as sent.
pub async fn get_verbatim(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<Json<UserResponse>> {
    let name = required(&params, "name")?;
    let record = state
        .registry
        .get_user(name)
        .ok_or(ServerError::UserNotFound)?;
    Ok(Json(UserResponse::new(name.to_string(), record)))
}

/// Register a new user from the `name` and `password` query parameters.
pub async fn add(
    State(state): State<AppState>,
    Query(params): Query<Params>,
) -> Result<impl IntoResponse> {
    let name = required(&params, "name")?;
    let password = required(&params, "password")?;

    if !state.registry.add_user(name, password) {
        return Err(ServerError::NameInUse);
    }

    info!(user = %user_key(name), total = state.registry.len(), "User added");
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User successfully added")),
    ))
}

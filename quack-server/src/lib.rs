//! Quack API Server
//!
//! A small HTTP API exposing an in-memory user registry and
//! date/time utility endpoints.

pub mod config;
pub mod error;
pub mod http;

pub use config::ServerConfig;
pub use error::{Result, ServerError};

//! Quack user registry
//!
//! An in-memory store of user records keyed by their lower-cased name.
//! Names are unique case-insensitively; records are created once and
//! never updated or removed for the lifetime of the registry.

mod record;
mod registry;

pub use record::UserRecord;
pub use registry::Registry;

/// Fold a user name into its registry key.
pub fn user_key(name: &str) -> String {
    name.to_lowercase()
}

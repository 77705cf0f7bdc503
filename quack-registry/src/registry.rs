use indexmap::IndexMap;
use indexmap::map::Entry;
use parking_lot::RwLock;
use tracing::debug;

use crate::{UserRecord, user_key};

/// In-memory user registry.
///
/// All access goes through a single lock, so checking for an existing name
/// and inserting a new record happen as one step. Keys are kept in
/// insertion order.
#[derive(Debug, Default)]
pub struct Registry {
    users: RwLock<IndexMap<String, UserRecord>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// All stored keys (lower-cased names).
    pub fn list_users(&self) -> Vec<String> {
        self.users.read().keys().cloned().collect()
    }

    /// Look up a user by name, ignoring case.
    pub fn get_user(&self, name: &str) -> Option<UserRecord> {
        self.users.read().get(&user_key(name)).cloned()
    }

    /// Add a user. Returns `false` if the name is already taken, in any casing.
    pub fn add_user(&self, name: &str, password: &str) -> bool {
        let key = user_key(name);
        match self.users.write().entry(key) {
            Entry::Occupied(entry) => {
                debug!(key = %entry.key(), "Name already in use");
                false
            }
            Entry::Vacant(entry) => {
                debug!(key = %entry.key(), "Adding user");
                entry.insert(UserRecord::new(name, password));
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.users.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.read().is_empty()
    }
}

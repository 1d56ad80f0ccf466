//! In-memory user store backed by DashMap

use contacts_types::{ContactsError, Result, User, UserPatch};
use dashmap::DashMap;

/// Owns every [`User`] keyed by id. Readers receive clones.
pub struct UserStore {
    data: DashMap<String, User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            data: DashMap::new(),
        }
    }

    /// Store a user under its id
    pub fn insert(&self, user: User) {
        self.data.insert(user.id.clone(), user);
    }

    /// Get a user by id
    pub fn get(&self, id: &str) -> Result<User> {
        self.data
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ContactsError::UserNotFound(id.to_string()))
    }

    /// All users, in no particular order
    pub fn list(&self) -> Vec<User> {
        self.data.iter().map(|entry| entry.value().clone()).collect()
    }

    /// Merge `patch` onto an existing user while holding its shard lock
    pub fn update(&self, id: &str, patch: UserPatch) -> Result<User> {
        let mut entry = self
            .data
            .get_mut(id)
            .ok_or_else(|| ContactsError::UserNotFound(id.to_string()))?;
        entry.apply(patch);
        Ok(entry.value().clone())
    }

    /// Remove a user
    pub fn delete(&self, id: &str) -> Result<User> {
        self.data
            .remove(id)
            .map(|(_, user)| user)
            .ok_or_else(|| ContactsError::UserNotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.data.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

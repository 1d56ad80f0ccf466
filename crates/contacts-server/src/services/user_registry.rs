//! User registry service

use crate::storage::UserStore;
use contacts_types::{NewUser, Result, User, UserPatch};
use std::sync::Arc;
use tracing::{debug, info};

pub struct UserRegistry {
    store: Arc<UserStore>,
}

impl UserRegistry {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    pub fn list_users(&self) -> Vec<User> {
        let users = self.store.list();
        debug!("Listing {} users", users.len());
        users
    }

    pub fn create_user(&self, req: NewUser) -> Result<User> {
        let user = req.into_user()?;
        self.store.insert(user.clone());
        info!(
            "Created user: id={}, name={} {}, total={}",
            user.id,
            user.name,
            user.surname,
            self.store.len()
        );

        Ok(user)
    }

    pub fn get_user(&self, id: &str) -> Result<User> {
        debug!("Getting user: {}", id);
        self.store.get(id)
    }

    pub fn exists(&self, id: &str) -> bool {
        self.store.contains(id)
    }

    pub fn update_user(&self, id: &str, patch: UserPatch) -> Result<User> {
        info!("Updating user: {}", id);
        self.store.update(id, patch)
    }

    pub fn delete_user(&self, id: &str) -> Result<()> {
        let user = self.store.delete(id)?;
        info!(
            "Deleted user: id={}, name={} {}, total={}",
            user.id,
            user.name,
            user.surname,
            self.store.len()
        );
        Ok(())
    }
}

//! Error types for Contacts

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContactsError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactsError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

//! Contacts Types - Pure type definitions
//!
//! This crate contains only data types and the domain error, with no async
//! runtime or HTTP dependencies.

pub mod error;
pub mod user;

pub use error::{ContactsError, Result};
pub use user::*;

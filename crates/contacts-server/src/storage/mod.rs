//! Storage layer
//!
//! Records live in memory only and are lost on restart.

pub mod memory;

pub use memory::UserStore;

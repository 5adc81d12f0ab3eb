// File: admin-client/src/users/mod.rs
//! User provisioning operations
//!
//! Each operation is a parameter table for the dispatcher: it picks the method,
//! endpoint, body and messages, then reports the result as an [`Outcome`].

pub mod api;
pub mod types;

pub use api::UserApi;
pub use types::{Outcome, UserRecord};

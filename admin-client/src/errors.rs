//! Error types for the admin client
//!
//! Backend errors describe a response the server sent but that could not be
//! classified as success. Everything else (transport, login, malformed input)
//! is a [`ClientError`] that the user operations propagate instead of absorbing.

use thiserror::Error;

/// Server answered, but not with a success status
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (HTTP {code})")]
pub struct BackendError {
    pub code: u16,
    pub message: String,
}

impl BackendError {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// Failure below HTTP: the request never produced a response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Nothing listening at the target; the only transient case
    #[error("Connection to {target} refused")]
    ConnectionRefused { target: String },

    #[error("Request to {target} failed: {reason}")]
    Other { target: String, reason: String },
}

impl TransportError {
    pub fn is_connection_refused(&self) -> bool {
        matches!(self, TransportError::ConnectionRefused { .. })
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Connection to {target} still refused after {attempts} attempts")]
    RetriesExhausted { target: String, attempts: u32 },

    #[error("Login rejected for user '{user}'")]
    LoginRejected { user: String },

    #[error("User '{login}' has no id, cannot address it on the server")]
    MissingUserId { login: String },

    #[error("User '{login}' has no isAdmin flag, refusing to guess permissions")]
    MissingAdminFlag { login: String },

    #[error("User '{login}' has no password to set")]
    MissingPassword { login: String },

    #[error("Failed to encode user record: {reason}")]
    InvalidRecord { reason: String },

    #[error("Invalid response body: {reason}")]
    InvalidResponse { reason: String },
}

impl ClientError {
    pub fn is_backend(&self) -> bool {
        matches!(self, ClientError::Backend(_))
    }
}

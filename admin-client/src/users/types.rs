// File: admin-client/src/users/types.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::BackendError;

/// A user as sent to and returned by the server.
///
/// Only the fields the operations read are typed; anything else is carried
/// through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_id: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            ..Default::default()
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_admin(mut self, is_admin: bool) -> Self {
        self.is_admin = Some(is_admin);
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// What an operation achieved
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Request accepted; the decoded response body
    Completed(Value),
    /// Nothing to do, no request was sent
    Unchanged,
    /// Server answered with a non-success status
    Rejected(BackendError),
}

impl Outcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Outcome::Unchanged)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected(_))
    }

    /// Collapse to the decoded body, losing why there is none
    pub fn into_value(self) -> Option<Value> {
        match self {
            Outcome::Completed(value) => Some(value),
            Outcome::Unchanged | Outcome::Rejected(_) => None,
        }
    }

    pub fn backend_error(&self) -> Option<&BackendError> {
        match self {
            Outcome::Rejected(err) => Some(err),
            _ => None,
        }
    }
}

// File: admin-client/src/config.rs
//! Connection parameters for the target server.
//!
//! A context is supplied by the caller on every operation and is never cached here.
//! It can be built directly or loaded from a TOML file:
//!
//! ```toml
//! [grafana]
//! host = "grafana.internal"
//! port = 3000
//! user = "admin"
//! password = "secret"
//! ```
//!
//! The `[grafana]` table is optional; the same keys are accepted at top level.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tracing::info;

use crate::constants::defaults;

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionContext {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_user")]
    pub user: String,
    #[serde(default = "default_password")]
    pub password: String,
}

fn default_host() -> String {
    defaults::HOST.to_string()
}

fn default_port() -> u16 {
    defaults::PORT
}

fn default_user() -> String {
    defaults::ADMIN_USER.to_string()
}

fn default_password() -> String {
    defaults::ADMIN_PASSWORD.to_string()
}

#[derive(Deserialize)]
struct ConnectionFile {
    grafana: Option<ConnectionContext>,
    #[serde(flatten)]
    top_level: ConnectionContext,
}

impl Default for ConnectionContext {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: default_password(),
        }
    }
}

impl ConnectionContext {
    pub fn new(
        host: impl Into<String>,
        port: u16,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            user: user.into(),
            password: password.into(),
        }
    }

    /// Load a context from a TOML file, preferring a `[grafana]` table when present
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read connection config: {:?}", path))?;

        let context = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse connection config: {:?}", path))?;

        info!(
            "Loaded connection config for {}:{} from {:?}",
            context.host, context.port, path
        );
        Ok(context)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConnectionFile = toml::from_str(content)?;
        Ok(file.grafana.unwrap_or(file.top_level))
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for ConnectionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionContext")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}

// File: admin-client/src/http/session.rs
//! Session acquisition by logging in.
//!
//! A session is requested fresh for every dispatched call and never cached, so
//! there is no invalidation to get wrong. A higher-throughput caller would need an
//! explicit cache with its own expiry policy.

use async_trait::async_trait;
use serde_json::json;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::config::ConnectionContext;
use crate::constants::{endpoints, headers};
use crate::errors::{BackendError, ClientError};
use crate::http::transport::{HttpMethod, HttpRequest, Transport};

/// Opaque server-issued session id
#[derive(Clone, PartialEq, Eq)]
pub struct Session(String);

impl Session {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Session(<redacted>)")
    }
}

/// Logs in against the server named by `ctx` with the given credentials.
///
/// `Ok(None)` means the server answered and refused the credentials.
#[async_trait]
pub trait SessionProvider: Send + Sync {
    async fn login(
        &self,
        ctx: &ConnectionContext,
        user: &str,
        password: &str,
    ) -> Result<Option<Session>, ClientError>;
}

/// JSON login against `/login`, reading the session from `Set-Cookie`
pub struct GrafanaLogin {
    transport: Arc<dyn Transport>,
}

impl GrafanaLogin {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }
}

#[async_trait]
impl SessionProvider for GrafanaLogin {
    async fn login(
        &self,
        ctx: &ConnectionContext,
        user: &str,
        password: &str,
    ) -> Result<Option<Session>, ClientError> {
        let payload = json!({ "user": user, "password": password });
        let request = HttpRequest::new(HttpMethod::Post, endpoints::LOGIN)
            .header("Content-Type", headers::CONTENT_TYPE_JSON)
            .header("Accept", headers::ACCEPT_JSON)
            .body(payload.to_string());

        // Single attempt; only the dispatched request is retried
        let response = self.transport.send(ctx, &request).await?;

        match response.status {
            200..=299 => {
                let session = response
                    .header_values("set-cookie")
                    .find_map(session_from_cookie);

                match session {
                    Some(id) => {
                        debug!("Logged in as {} on {}:{}", user, ctx.host, ctx.port);
                        Ok(Some(Session::new(id)))
                    }
                    None => {
                        warn!(
                            "Login for {} on {}:{} succeeded without a session cookie",
                            user, ctx.host, ctx.port
                        );
                        Ok(None)
                    }
                }
            }
            401 | 403 => {
                info!("Login rejected for {} on {}:{}", user, ctx.host, ctx.port);
                Ok(None)
            }
            code => Err(BackendError::new(
                code,
                format!("Login for {} returned unexpected response code {}", user, code),
            )
            .into()),
        }
    }
}

/// Extract the session id from one `Set-Cookie` header value
fn session_from_cookie(cookie: &str) -> Option<String> {
    let pair = cookie.split(';').next()?.trim();
    let (name, value) = pair.split_once('=')?;

    if (name == headers::SESSION_COOKIE || name == headers::NEW_SESSION_COOKIE)
        && !value.is_empty()
    {
        Some(value.to_string())
    } else {
        None
    }
}

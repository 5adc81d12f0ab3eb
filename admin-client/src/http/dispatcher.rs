// File: admin-client/src/http/dispatcher.rs
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::config::ConnectionContext;
use crate::constants::{headers, retry};
use crate::errors::ClientError;
use crate::http::response::{handle_response, ResponseMessages};
use crate::http::session::SessionProvider;
use crate::http::transport::{HttpMethod, HttpRequest, HttpResponse, Transport};

/// Everything one operation needs dispatched. Built fresh per call and consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationSpec {
    /// Short operation name, used for logging
    pub name: &'static str,
    pub method: HttpMethod,
    pub endpoint: String,
    pub success_message: &'static str,
    /// Template with a `{code}` placeholder
    pub unknown_code_message: &'static str,
    pub accept: &'static str,
    pub body: Option<Value>,
}

/// Logs in, sends one request with bounded retry and decodes the reply
pub struct Dispatcher {
    transport: Arc<dyn Transport>,
    sessions: Arc<dyn SessionProvider>,
}

impl Dispatcher {
    pub fn new(transport: Arc<dyn Transport>, sessions: Arc<dyn SessionProvider>) -> Self {
        Self {
            transport,
            sessions,
        }
    }

    pub fn sessions(&self) -> &dyn SessionProvider {
        self.sessions.as_ref()
    }

    #[instrument(skip(self, ctx, spec), fields(operation = spec.name, endpoint = %spec.endpoint))]
    pub async fn do_request(
        &self,
        ctx: &ConnectionContext,
        spec: OperationSpec,
    ) -> Result<Value, ClientError> {
        let session = self
            .sessions
            .login(ctx, &ctx.user, &ctx.password)
            .await?
            .ok_or_else(|| ClientError::LoginRejected {
                user: ctx.user.clone(),
            })?;

        let cookie = format!(
            "{}={}; {}={}",
            headers::USER_COOKIE,
            ctx.user,
            headers::SESSION_COOKIE,
            session.id()
        );

        let mut request = HttpRequest::new(spec.method, spec.endpoint)
            .header("Cookie", cookie)
            .header("Content-Type", headers::CONTENT_TYPE_JSON)
            .header("Accept", spec.accept);
        if let Some(body) = &spec.body {
            request = request.body(body.to_string());
        }

        let response = send_with_retry(
            self.transport.as_ref(),
            ctx,
            &request,
            retry::MAX_SEND_ATTEMPTS,
        )
        .await?;

        handle_response(
            &request,
            &response,
            ResponseMessages {
                success: spec.success_message,
                unknown_code: spec.unknown_code_message,
            },
        )?;

        parse_body(&response.body)
    }
}

/// Send `request`, retrying only while the connection is refused.
///
/// No delay between attempts. Any other transport failure is returned at once.
pub async fn send_with_retry(
    transport: &dyn Transport,
    ctx: &ConnectionContext,
    request: &HttpRequest,
    max_attempts: u32,
) -> Result<HttpResponse, ClientError> {
    let mut attempt = 0;

    loop {
        attempt += 1;

        match transport.send(ctx, request).await {
            Ok(response) => {
                debug!(
                    "{} {} answered {} (attempt {})",
                    request.method, request.path, response.status, attempt
                );
                return Ok(response);
            }
            Err(e) if e.is_connection_refused() => {
                if attempt >= max_attempts {
                    return Err(ClientError::RetriesExhausted {
                        target: format!("{}:{}", ctx.host, ctx.port),
                        attempts: attempt,
                    });
                }
                warn!(
                    "{} (attempt {}/{}), retrying",
                    e, attempt, max_attempts
                );
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn parse_body(body: &str) -> Result<Value, ClientError> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(body).map_err(|e| ClientError::InvalidResponse {
        reason: e.to_string(),
    })
}

// File: admin-client/src/http/response.rs
//! Status code classification for admin responses

use tracing::info;

use crate::errors::BackendError;
use crate::http::transport::{HttpRequest, HttpResponse};

/// Messages an operation wants reported for its outcome.
///
/// `unknown_code` may contain `{code}`, replaced with the actual status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseMessages<'a> {
    pub success: &'a str,
    pub unknown_code: &'a str,
}

/// Reason text for the non-success codes the admin API is known to send
fn known_failure(code: u16) -> Option<&'static str> {
    let reason = match code {
        400 => "Bad request, the payload was rejected",
        401 => "Unauthorized, the session was not accepted",
        403 => "Permission denied, server admin rights are required",
        404 => "Not found",
        409 => "Conflict, the user already exists",
        412 => "Precondition failed",
        422 => "Unprocessable entity",
        500 => "Internal server error",
        _ => return None,
    };
    Some(reason)
}

/// Classify `response` as success or raise a [`BackendError`] carrying its code
pub fn handle_response(
    request: &HttpRequest,
    response: &HttpResponse,
    messages: ResponseMessages<'_>,
) -> Result<(), BackendError> {
    let code = response.status;

    if response.is_success() {
        info!("{}", messages.success);
        return Ok(());
    }

    match known_failure(code) {
        Some(reason) => Err(BackendError::new(
            code,
            format!("{}: {} {}", reason, request.method, request.path),
        )),
        None => Err(BackendError::new(
            code,
            messages.unknown_code.replace("{code}", &code.to_string()),
        )),
    }
}

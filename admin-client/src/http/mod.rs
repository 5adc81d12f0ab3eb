// File: admin-client/src/http/mod.rs
//! HTTP plumbing for talking to the server's admin API
//!
//! # Architecture
//!
//! ```text
//! UserApi → OperationSpec → Dispatcher ─ login ─→ SessionProvider
//!                               │
//!                               ├─ send (retry on refused) ─→ Transport
//!                               ↓
//!                        handle_response → JSON body
//! ```
//!
//! # Communication Pattern
//!
//! 1. Log in with the admin credentials to get a fresh session
//! 2. Send one request carrying the session cookie
//! 3. Classify the status code
//! 4. Decode the JSON body
//!
//! No connection or session is kept between calls.

pub mod dispatcher;
pub mod response;
pub mod session;
pub mod transport;

pub use dispatcher::{send_with_retry, Dispatcher, OperationSpec};
pub use response::{handle_response, ResponseMessages};
pub use session::{GrafanaLogin, Session, SessionProvider};
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};

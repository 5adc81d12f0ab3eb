//! Client for the user administration endpoints of a Grafana server
//!
//! Every public operation logs in with the admin credentials, sends exactly one
//! request and reports what happened through [`Outcome`].
//!
//! ```ignore
//! let ctx = ConnectionContext::new("grafana.internal", 3000, "admin", "secret");
//! let api = UserApi::new();
//!
//! let alice = UserRecord::new("alice").with_password("changeme");
//! match api.create_user(&alice, &ctx).await? {
//!     Outcome::Completed(body) => info!("created: {}", body),
//!     Outcome::Rejected(e) => warn!("server refused: {}", e),
//!     Outcome::Unchanged => {}
//! }
//! ```

pub mod config;
pub mod constants;
pub mod errors;
pub mod http;
pub mod logging;
pub mod users;

// Re-export commonly used types
pub use config::ConnectionContext;
pub use errors::{BackendError, ClientError, TransportError};
pub use http::{Dispatcher, GrafanaLogin, HttpMethod, OperationSpec, ReqwestTransport, Session};
pub use users::{Outcome, UserApi, UserRecord};

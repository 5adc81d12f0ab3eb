//! Reusable test utilities:
//! - Mock Grafana HTTP server (wiremock)
//! - Scriptable, capturing transport and session stubs
//! - Common test data

// Not every test binary uses every helper
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod mock_grafana;
pub mod stub_transport;
pub mod test_data;

pub use mock_grafana::MockGrafanaServer;
pub use stub_transport::{StubSessions, StubTransport};
pub use test_data::*;

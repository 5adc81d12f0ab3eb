//! Mock Grafana server for testing
//!
//! Serves the login endpoint and lets each test mount the admin endpoints it
//! needs, so requests go through the real reqwest transport.

use admin_client::ConnectionContext;
use serde_json::{json, Value};
use wiremock::{
    matchers::{body_json, method, path},
    Mock, MockServer, ResponseTemplate,
};

use super::test_data::{ADMIN_PASSWORD, ADMIN_USER, SESSION_ID};

pub struct MockGrafanaServer {
    pub server: MockServer,
}

impl MockGrafanaServer {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Admin context pointing at this server
    pub fn admin_context(&self) -> ConnectionContext {
        let addr = self.server.address();
        ConnectionContext::new(addr.ip().to_string(), addr.port(), ADMIN_USER, ADMIN_PASSWORD)
    }

    /// Accept the admin credentials and hand out the test session
    pub async fn mock_admin_login(&self) {
        self.mock_login_success(ADMIN_USER, ADMIN_PASSWORD).await;
    }

    pub async fn mock_login_success(&self, user: &str, password: &str) {
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(json!({ "user": user, "password": password })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header(
                        "Set-Cookie",
                        format!("grafana_sess={}; Path=/; HttpOnly", SESSION_ID).as_str(),
                    )
                    .set_body_json(json!({ "message": "Logged in" })),
            )
            .mount(&self.server)
            .await;
    }

    pub async fn mock_login_rejected(&self, user: &str, password: &str) {
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_json(json!({ "user": user, "password": password })))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({ "message": "Invalid username or password" })),
            )
            .mount(&self.server)
            .await;
    }

    /// Any login attempt fails with `status`
    pub async fn mock_login_status(&self, status: u16) {
        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.server)
            .await;
    }

    /// Mount an admin endpoint answering with `status` and `body`,
    /// expected to be hit exactly `times` times
    pub async fn mock_endpoint(
        &self,
        http_method: &str,
        endpoint: &str,
        status: u16,
        body: Value,
        times: u64,
    ) {
        Mock::given(method(http_method))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .expect(times)
            .mount(&self.server)
            .await;
    }
}

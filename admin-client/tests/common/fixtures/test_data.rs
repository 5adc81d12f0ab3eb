//! Common users and connection contexts

use admin_client::{ConnectionContext, UserRecord};

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "admin";
pub const SESSION_ID: &str = "5eca2376d310627f";

pub fn admin_context() -> ConnectionContext {
    ConnectionContext::new("grafana.test", 3000, ADMIN_USER, ADMIN_PASSWORD)
}

pub fn alice() -> UserRecord {
    UserRecord::new("alice").with_password("x")
}

pub fn alice_with_id() -> UserRecord {
    UserRecord::new("alice")
        .with_password("x")
        .with_id(7)
        .with_email("alice@example.com")
        .with_admin(true)
}

pub fn session_cookie() -> String {
    format!("grafana_user={}; grafana_sess={}", ADMIN_USER, SESSION_ID)
}

//! Fixed values shared by the dispatcher and the user operations
//!
//! Grouped by concern so header strings and endpoint paths live in one place.

/// Retry bounds for the send step
pub mod retry {
    /// Attempts made when the server refuses the connection
    pub const MAX_SEND_ATTEMPTS: u32 = 10;
}

/// Header names and values attached to every admin request
pub mod headers {
    pub const CONTENT_TYPE_JSON: &str = "application/json;charset=utf-8;";

    pub const ACCEPT_JSON: &str = "application/json";

    /// Cookie carrying the admin login name
    pub const USER_COOKIE: &str = "grafana_user";

    /// Cookie carrying the session id
    pub const SESSION_COOKIE: &str = "grafana_sess";

    /// Session cookie name used by newer servers
    pub const NEW_SESSION_COOKIE: &str = "grafana_session";
}

/// Endpoint paths on the server
pub mod endpoints {
    pub const LOGIN: &str = "/login";

    pub const ADMIN_USERS: &str = "/api/admin/users";

    /// Listing uses the trailing slash the server has always accepted
    pub const USERS: &str = "/api/users/";

    pub fn user(id: i64) -> String {
        format!("/api/users/{}", id)
    }

    pub fn admin_user(id: i64) -> String {
        format!("{}/{}", ADMIN_USERS, id)
    }

    pub fn admin_user_password(id: i64) -> String {
        format!("{}/{}/password", ADMIN_USERS, id)
    }

    pub fn admin_user_permissions(id: i64) -> String {
        format!("{}/{}/permissions", ADMIN_USERS, id)
    }
}

/// Defaults for a connection context when the config leaves fields out
pub mod defaults {
    pub const HOST: &str = "localhost";

    pub const PORT: u16 = 3000;

    pub const ADMIN_USER: &str = "admin";

    pub const ADMIN_PASSWORD: &str = "admin";
}

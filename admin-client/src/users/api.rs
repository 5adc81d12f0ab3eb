// File: admin-client/src/users/api.rs
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::ConnectionContext;
use crate::constants::{endpoints, headers};
use crate::errors::{BackendError, ClientError};
use crate::http::{
    Dispatcher, GrafanaLogin, HttpMethod, OperationSpec, ReqwestTransport, SessionProvider,
    Transport,
};
use crate::users::types::{Outcome, UserRecord};

pub struct UserApi {
    dispatcher: Dispatcher,
}

impl Default for UserApi {
    fn default() -> Self {
        Self::new()
    }
}

impl UserApi {
    /// Reqwest transport with the JSON login flow on top of it
    pub fn new() -> Self {
        let transport: Arc<dyn Transport> = Arc::new(ReqwestTransport::new());
        let sessions = Arc::new(GrafanaLogin::new(transport.clone()));
        Self::with_parts(transport, sessions)
    }

    pub fn with_parts(transport: Arc<dyn Transport>, sessions: Arc<dyn SessionProvider>) -> Self {
        Self {
            dispatcher: Dispatcher::new(transport, sessions),
        }
    }

    pub async fn create_user(
        &self,
        user: &UserRecord,
        ctx: &ConnectionContext,
    ) -> Result<Outcome, ClientError> {
        let spec = OperationSpec {
            name: "create_user",
            method: HttpMethod::Post,
            endpoint: endpoints::ADMIN_USERS.to_string(),
            success_message: "The user has been successfully created.",
            unknown_code_message: "create_user: unchecked response code {code}",
            accept: headers::ACCEPT_JSON,
            body: Some(record_body(user)?),
        };
        self.run(ctx, spec).await
    }

    pub async fn update_user_details(
        &self,
        user: &UserRecord,
        ctx: &ConnectionContext,
    ) -> Result<Outcome, ClientError> {
        let spec = OperationSpec {
            name: "update_user_details",
            method: HttpMethod::Put,
            endpoint: endpoints::user(require_id(user)?),
            success_message: "The user has been successfully updated.",
            unknown_code_message: "update_user_details: unchecked response code {code}",
            accept: headers::ACCEPT_JSON,
            body: Some(record_body(user)?),
        };
        self.run(ctx, spec).await
    }

    /// Set the user's password unless it already works.
    ///
    /// A successful probe login with the user's own credentials short-circuits
    /// to [`Outcome::Unchanged`] without touching the admin endpoint.
    pub async fn update_user_password(
        &self,
        user: &UserRecord,
        ctx: &ConnectionContext,
    ) -> Result<Outcome, ClientError> {
        let password = user
            .password
            .as_deref()
            .ok_or_else(|| ClientError::MissingPassword {
                login: user.login.clone(),
            })?;
        let id = require_id(user)?;

        let probe = self
            .dispatcher
            .sessions()
            .login(ctx, &user.login, password)
            .await;
        match probe {
            Ok(Some(_)) => {
                info!("Password for {} is already up to date", user.login);
                return Ok(Outcome::Unchanged);
            }
            Ok(None) => {}
            Err(ClientError::Backend(err)) => {
                return Ok(rejected("update_user_password", ctx, err));
            }
            Err(e) => return Err(e),
        }

        let spec = OperationSpec {
            name: "update_user_password",
            method: HttpMethod::Put,
            endpoint: endpoints::admin_user_password(id),
            success_message: "User's password has been successfully updated.",
            unknown_code_message: "update_user_password: unchecked response code {code}",
            accept: headers::ACCEPT_JSON,
            body: Some(json!({ "password": password })),
        };
        self.run(ctx, spec).await
    }

    pub async fn update_user_permissions(
        &self,
        user: &UserRecord,
        ctx: &ConnectionContext,
    ) -> Result<Outcome, ClientError> {
        let id = require_id(user)?;
        let is_admin = user.is_admin.ok_or_else(|| ClientError::MissingAdminFlag {
            login: user.login.clone(),
        })?;

        let spec = OperationSpec {
            name: "update_user_permissions",
            method: HttpMethod::Put,
            endpoint: endpoints::admin_user_permissions(id),
            success_message: "User's permissions have been successfully updated.",
            unknown_code_message: "update_user_permissions: unchecked response code {code}",
            accept: headers::ACCEPT_JSON,
            body: Some(json!({ "isGrafanaAdmin": is_admin })),
        };
        self.run(ctx, spec).await
    }

    /// The full record goes along as the body even though servers ignore it
    pub async fn delete_user(
        &self,
        user: &UserRecord,
        ctx: &ConnectionContext,
    ) -> Result<Outcome, ClientError> {
        let spec = OperationSpec {
            name: "delete_user",
            method: HttpMethod::Delete,
            endpoint: endpoints::admin_user(require_id(user)?),
            success_message: "The user has been successfully deleted.",
            unknown_code_message: "delete_user: unchecked response code {code}",
            accept: headers::ACCEPT_JSON,
            body: Some(record_body(user)?),
        };
        self.run(ctx, spec).await
    }

    pub async fn list_users(&self, ctx: &ConnectionContext) -> Result<Outcome, ClientError> {
        let spec = OperationSpec {
            name: "list_users",
            method: HttpMethod::Get,
            endpoint: endpoints::USERS.to_string(),
            success_message: "The list of users has been successfully retrieved.",
            unknown_code_message: "list_users: unchecked response code {code}",
            accept: headers::ACCEPT_JSON,
            body: None,
        };
        self.run(ctx, spec).await
    }

    /// Dispatch and fold backend rejections into the outcome
    async fn run(
        &self,
        ctx: &ConnectionContext,
        spec: OperationSpec,
    ) -> Result<Outcome, ClientError> {
        let name = spec.name;

        match self.dispatcher.do_request(ctx, spec).await {
            Ok(value) => Ok(Outcome::Completed(value)),
            Err(ClientError::Backend(err)) => Ok(rejected(name, ctx, err)),
            Err(e) => Err(e),
        }
    }
}

fn rejected(name: &str, ctx: &ConnectionContext, err: BackendError) -> Outcome {
    warn!("{} rejected by {}:{}: {}", name, ctx.host, ctx.port, err);
    Outcome::Rejected(err)
}

fn require_id(user: &UserRecord) -> Result<i64, ClientError> {
    user.id.ok_or_else(|| ClientError::MissingUserId {
        login: user.login.clone(),
    })
}

fn record_body(user: &UserRecord) -> Result<Value, ClientError> {
    serde_json::to_value(user).map_err(|e| ClientError::InvalidRecord {
        reason: format!("{}: {}", user.login, e),
    })
}

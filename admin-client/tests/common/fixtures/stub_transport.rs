//! In-process transport and session stubs
//!
//! `StubTransport` records every request it is handed and replays a script of
//! results, falling back to a fixed response once the script runs out.

use admin_client::http::{HttpRequest, HttpResponse, Session, SessionProvider, Transport};
use admin_client::{BackendError, ClientError, ConnectionContext, TransportError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use super::test_data::SESSION_ID;

pub struct StubTransport {
    script: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    fallback: HttpResponse,
    refuse_all: bool,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    /// Always answer with `status` and `body`
    pub fn responding(status: u16, body: &str) -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            fallback: HttpResponse::new(status, body),
            refuse_all: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Refuse the first `refusals` connections, then answer with `status` and `body`
    pub fn refusing_then(refusals: usize, status: u16, body: &str) -> Self {
        let stub = Self::responding(status, body);
        {
            let mut script = stub.script.lock().unwrap();
            for _ in 0..refusals {
                script.push_back(Err(refused()));
            }
        }
        stub
    }

    /// Refuse every connection
    pub fn always_refusing() -> Self {
        Self {
            refuse_all: true,
            ..Self::responding(200, "{}")
        }
    }

    /// Fail once with a non-retryable error, then answer normally
    pub fn failing_with(reason: &str) -> Self {
        let stub = Self::responding(200, "{}");
        stub.script
            .lock()
            .unwrap()
            .push_back(Err(TransportError::Other {
                target: "grafana.test:3000".to_string(),
                reason: reason.to_string(),
            }));
        stub
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

fn refused() -> TransportError {
    TransportError::ConnectionRefused {
        target: "grafana.test:3000".to_string(),
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn send(
        &self,
        _ctx: &ConnectionContext,
        request: &HttpRequest,
    ) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());

        if self.refuse_all {
            return Err(refused());
        }

        match self.script.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(self.fallback.clone()),
        }
    }
}

/// Session provider that accepts a fixed set of credentials
pub struct StubSessions {
    accepted: Vec<(String, String)>,
    failures: Vec<(String, BackendError)>,
    logins: Mutex<Vec<String>>,
}

impl StubSessions {
    pub fn accepting(credentials: &[(&str, &str)]) -> Self {
        Self {
            accepted: credentials
                .iter()
                .map(|(u, p)| (u.to_string(), p.to_string()))
                .collect(),
            failures: Vec::new(),
            logins: Mutex::new(Vec::new()),
        }
    }

    /// Answer logins for `user` with a backend error instead of a verdict
    pub fn failing_for(mut self, user: &str, err: BackendError) -> Self {
        self.failures.push((user.to_string(), err));
        self
    }

    pub fn admin_only() -> Self {
        Self::accepting(&[("admin", "admin")])
    }

    /// Users a login was attempted for, in order
    pub fn logins(&self) -> Vec<String> {
        self.logins.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionProvider for StubSessions {
    async fn login(
        &self,
        _ctx: &ConnectionContext,
        user: &str,
        password: &str,
    ) -> Result<Option<Session>, ClientError> {
        self.logins.lock().unwrap().push(user.to_string());

        if let Some((_, err)) = self.failures.iter().find(|(u, _)| u == user) {
            return Err(err.clone().into());
        }

        let ok = self
            .accepted
            .iter()
            .any(|(u, p)| u == user && p == password);
        Ok(ok.then(|| Session::new(SESSION_ID)))
    }
}

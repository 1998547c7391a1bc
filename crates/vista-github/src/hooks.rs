//! Executing hook requests.

use serde_json::Value;

use crate::error::{HooksError, TransportError};
use crate::request::{self, CreateHook, EditHook, HookRequest};

/// Raw HTTP response handed back by a [`Transport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Something that can deliver a [`HookRequest`] to the API.
pub trait Transport {
    fn send(&self, request: &HookRequest) -> Result<Response, TransportError>;
}

/// Repository hooks client over a [`Transport`].
pub struct Hooks<T: Transport> {
    transport: T,
}

impl<T: Transport> Hooks<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn create(&self, user: &str, repo: &str, hook: &CreateHook) -> Result<Value, HooksError> {
        self.execute(&request::create(user, repo, hook)?)
    }

    pub fn edit(
        &self,
        user: &str,
        repo: &str,
        id: u64,
        hook: &EditHook,
    ) -> Result<Value, HooksError> {
        self.execute(&request::edit(user, repo, id, hook)?)
    }

    pub fn get(&self, user: &str, repo: &str, id: u64) -> Result<Value, HooksError> {
        self.execute(&request::get(user, repo, id))
    }

    pub fn list(&self, user: &str, repo: &str) -> Result<Value, HooksError> {
        self.execute(&request::list(user, repo))
    }

    pub fn delete(&self, user: &str, repo: &str, id: u64) -> Result<Value, HooksError> {
        self.execute(&request::delete(user, repo, id))
    }

    pub fn ping(&self, user: &str, repo: &str, id: u64) -> Result<Value, HooksError> {
        self.execute(&request::ping(user, repo, id))
    }

    pub fn test(&self, user: &str, repo: &str, id: u64) -> Result<Value, HooksError> {
        self.execute(&request::test(user, repo, id))
    }

    /// Sends `request` and checks the response status.
    pub fn execute(&self, request: &HookRequest) -> Result<Value, HooksError> {
        tracing::debug!(method = %request.method, path = %request.path, "sending hook request");
        let response = self.transport.send(request).map_err(HooksError::Transport)?;
        process_response(&response, request.expected_status)
    }
}

/// Decodes a response, failing unless it carries `expected` status.
///
/// An empty body decodes to `null`. On a status mismatch the API's
/// `message` field is used when present, else the raw body.
pub fn process_response(response: &Response, expected: u16) -> Result<Value, HooksError> {
    if response.status != expected {
        let message = serde_json::from_str::<Value>(&response.body)
            .ok()
            .and_then(|body| body.get("message").and_then(Value::as_str).map(String::from))
            .unwrap_or_else(|| response.body.clone());
        tracing::warn!(status = response.status, expected, %message, "hook request failed");
        return Err(HooksError::UnexpectedStatus {
            status: response.status,
            expected,
            message,
        });
    }

    if response.body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&response.body)?)
}

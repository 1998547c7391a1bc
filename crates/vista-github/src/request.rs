//! Request builders for the repository hooks endpoints.
//!
//! Each builder validates its input and returns a [`HookRequest`] describing
//! the HTTP call, including the status code a successful response carries.
//! Nothing here performs I/O; see [`Hooks`](crate::Hooks) for that.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::error::HooksError;
use crate::events::{check_events, EventList};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully described API call.
#[derive(Debug, Clone, PartialEq)]
pub struct HookRequest {
    pub method: Method,
    /// Path relative to the API root, e.g. `/repos/octo/hello/hooks`.
    pub path: String,
    pub body: Option<Value>,
    pub expected_status: u16,
}

/// Settings for a new hook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateHook {
    /// Service name, e.g. `web`.
    pub name: String,
    pub config: Value,
    pub events: Vec<String>,
    pub active: bool,
}

impl CreateHook {
    /// A hook for `name`, active and subscribed to `push`.
    pub fn new(name: impl Into<String>, config: Value) -> Self {
        Self {
            name: name.into(),
            config,
            events: vec!["push".to_string()],
            active: true,
        }
    }

    pub fn events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events = events.into_iter().map(Into::into).collect();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Changes to an existing hook.
///
/// `events` replaces the subscription list; `add_events` and
/// `remove_events` adjust it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditHook {
    pub name: String,
    pub config: Value,
    pub events: Vec<String>,
    pub add_events: Vec<String>,
    pub remove_events: Vec<String>,
    pub active: bool,
}

impl EditHook {
    pub fn new(name: impl Into<String>, config: Value) -> Self {
        Self {
            name: name.into(),
            config,
            events: vec!["push".to_string()],
            add_events: Vec::new(),
            remove_events: Vec::new(),
            active: true,
        }
    }

    pub fn events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.events = events.into_iter().map(Into::into).collect();
        self
    }

    pub fn add_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_events = events.into_iter().map(Into::into).collect();
        self
    }

    pub fn remove_events<I, S>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.remove_events = events.into_iter().map(Into::into).collect();
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

fn hooks_path(user: &str, repo: &str) -> String {
    format!("/repos/{}/{}/hooks", user, repo)
}

fn hook_path(user: &str, repo: &str, id: u64) -> String {
    format!("{}/{}", hooks_path(user, repo), id)
}

/// `POST /repos/{user}/{repo}/hooks`, expecting `201`.
pub fn create(user: &str, repo: &str, hook: &CreateHook) -> Result<HookRequest, HooksError> {
    check_events(EventList::Events, &hook.events)?;

    Ok(HookRequest {
        method: Method::Post,
        path: hooks_path(user, repo),
        body: Some(serde_json::to_value(hook)?),
        expected_status: 201,
    })
}

/// `PATCH /repos/{user}/{repo}/hooks/{id}`, expecting `200`.
pub fn edit(user: &str, repo: &str, id: u64, hook: &EditHook) -> Result<HookRequest, HooksError> {
    check_events(EventList::Events, &hook.events)?;
    check_events(EventList::AddEvents, &hook.add_events)?;
    check_events(EventList::RemoveEvents, &hook.remove_events)?;

    Ok(HookRequest {
        method: Method::Patch,
        path: hook_path(user, repo, id),
        body: Some(serde_json::to_value(hook)?),
        expected_status: 200,
    })
}

/// `GET /repos/{user}/{repo}/hooks/{id}`, expecting `200`.
pub fn get(user: &str, repo: &str, id: u64) -> HookRequest {
    HookRequest {
        method: Method::Get,
        path: hook_path(user, repo, id),
        body: None,
        expected_status: 200,
    }
}

/// `GET /repos/{user}/{repo}/hooks`, expecting `200`.
pub fn list(user: &str, repo: &str) -> HookRequest {
    HookRequest {
        method: Method::Get,
        path: hooks_path(user, repo),
        body: None,
        expected_status: 200,
    }
}

/// `DELETE /repos/{user}/{repo}/hooks/{id}`, expecting `204`.
pub fn delete(user: &str, repo: &str, id: u64) -> HookRequest {
    HookRequest {
        method: Method::Delete,
        path: hook_path(user, repo, id),
        body: None,
        expected_status: 204,
    }
}

/// `POST /repos/{user}/{repo}/hooks/{id}/pings`, expecting `204`.
pub fn ping(user: &str, repo: &str, id: u64) -> HookRequest {
    HookRequest {
        method: Method::Post,
        path: format!("{}/pings", hook_path(user, repo, id)),
        body: Some(Value::String(String::new())),
        expected_status: 204,
    }
}

/// `POST /repos/{user}/{repo}/hooks/{id}/test`, expecting `204`.
pub fn test(user: &str, repo: &str, id: u64) -> HookRequest {
    HookRequest {
        method: Method::Post,
        path: format!("{}/test", hook_path(user, repo, id)),
        body: Some(Value::String(String::new())),
        expected_status: 204,
    }
}

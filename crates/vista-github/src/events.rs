//! Webhook event names accepted by the API.

use std::fmt;

use crate::error::HooksError;

/// Every event a hook may subscribe to. `*` subscribes to all of them.
pub const HOOK_EVENTS: &[&str] = &[
    "*",
    "commit_comment",
    "create",
    "delete",
    "deployment",
    "deployment_status",
    "download",
    "follow",
    "fork",
    "fork_apply",
    "gist",
    "gollum",
    "issue_comment",
    "issues",
    "member",
    "public",
    "pull_request",
    "pull_request_review_comment",
    "push",
    "release",
    "status",
    "team_add",
    "watch",
];

pub fn is_allowed(event: &str) -> bool {
    HOOK_EVENTS.contains(&event)
}

/// Which request field an event list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventList {
    Events,
    AddEvents,
    RemoveEvents,
}

impl EventList {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventList::Events => "events",
            EventList::AddEvents => "add_events",
            EventList::RemoveEvents => "remove_events",
        }
    }
}

impl fmt::Display for EventList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fails on the first event not in [`HOOK_EVENTS`].
pub fn check_events(list: EventList, events: &[String]) -> Result<(), HooksError> {
    match events.iter().find(|event| !is_allowed(event)) {
        Some(event) => Err(HooksError::UnauthorizedEvent {
            list,
            event: event.clone(),
        }),
        None => Ok(()),
    }
}

//! Hooks client behavior against a recording transport.

use std::cell::RefCell;

use proptest::prelude::*;
use serde_json::json;
use vista_github::{
    CreateHook, EditHook, EventList, HookRequest, Hooks, HooksError, Method, Response, Transport,
    TransportError, HOOK_EVENTS,
};

/// Replies with a fixed response and records every request.
struct RecordingTransport {
    reply: Response,
    sent: RefCell<Vec<HookRequest>>,
}

impl RecordingTransport {
    fn replying(status: u16, body: &str) -> Self {
        Self {
            reply: Response::new(status, body),
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: &HookRequest) -> Result<Response, TransportError> {
        self.sent.borrow_mut().push(request.clone());
        Ok(self.reply.clone())
    }
}

struct DownTransport;

impl Transport for DownTransport {
    fn send(&self, _request: &HookRequest) -> Result<Response, TransportError> {
        Err("connection refused".into())
    }
}

#[test]
fn create_returns_decoded_hook() {
    let hooks = Hooks::new(RecordingTransport::replying(201, r#"{"id": 12, "active": true}"#));
    let created = hooks
        .create("octo", "hello", &CreateHook::new("web", json!({})))
        .unwrap();

    assert_eq!(created, json!({"id": 12, "active": true}));
    let sent = hooks.transport().sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].method, Method::Post);
    assert_eq!(sent[0].path, "/repos/octo/hello/hooks");
}

#[test]
fn unknown_event_never_reaches_transport() {
    let hooks = Hooks::new(RecordingTransport::replying(200, "{}"));
    let hook = EditHook::new("web", json!({})).remove_events(["not-an-event"]);

    let err = hooks.edit("octo", "hello", 3, &hook).unwrap_err();
    assert!(matches!(
        err,
        HooksError::UnauthorizedEvent { list: EventList::RemoveEvents, .. }
    ));
    assert!(hooks.transport().sent.borrow().is_empty());
}

#[test]
fn wrong_status_fails_with_api_message() {
    let hooks = Hooks::new(RecordingTransport::replying(404, r#"{"message": "Not Found"}"#));
    let err = hooks.get("octo", "hello", 99).unwrap_err();
    assert_eq!(err.to_string(), "unexpected status 404 (expected 200): Not Found");
}

#[test]
fn delete_ping_test_expect_no_content() {
    let hooks = Hooks::new(RecordingTransport::replying(204, ""));
    assert_eq!(hooks.delete("o", "r", 1).unwrap(), serde_json::Value::Null);
    assert_eq!(hooks.ping("o", "r", 1).unwrap(), serde_json::Value::Null);
    assert_eq!(hooks.test("o", "r", 1).unwrap(), serde_json::Value::Null);

    let paths: Vec<String> = hooks
        .transport()
        .sent
        .borrow()
        .iter()
        .map(|r| r.path.clone())
        .collect();
    assert_eq!(
        paths,
        vec!["/repos/o/r/hooks/1", "/repos/o/r/hooks/1/pings", "/repos/o/r/hooks/1/test"]
    );
}

#[test]
fn list_returns_array() {
    let hooks = Hooks::new(RecordingTransport::replying(200, r#"[{"id": 1}, {"id": 2}]"#));
    let listed = hooks.list("o", "r").unwrap();
    assert_eq!(listed.as_array().map(Vec::len), Some(2));
}

#[test]
fn transport_failure_is_wrapped() {
    let hooks = Hooks::new(DownTransport);
    let err = hooks.list("o", "r").unwrap_err();
    assert!(matches!(err, HooksError::Transport(_)));
    assert_eq!(err.to_string(), "transport error: connection refused");
}

proptest! {
    #[test]
    fn allowed_events_always_build(picks in prop::collection::vec(0..HOOK_EVENTS.len(), 1..6)) {
        let events: Vec<&str> = picks.iter().map(|&i| HOOK_EVENTS[i]).collect();
        let hook = CreateHook::new("web", json!({})).events(events.clone());
        let request = vista_github::request::create("o", "r", &hook).unwrap();
        prop_assert_eq!(request.body.unwrap()["events"].clone(), json!(events));
    }

    #[test]
    fn unlisted_events_are_rejected(event in "[a-z_]{1,20}") {
        prop_assume!(!HOOK_EVENTS.contains(&event.as_str()));
        let hook = CreateHook::new("web", json!({})).events([event]);
        let is_unauthorized = matches!(
            vista_github::request::create("o", "r", &hook),
            Err(HooksError::UnauthorizedEvent { .. })
        );
        prop_assert!(is_unauthorized);
    }
}

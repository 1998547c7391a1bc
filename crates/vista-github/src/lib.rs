//! # Vista GitHub - Repository webhooks
//!
//! Builds and executes calls to the repository hooks endpoints. Event names
//! are checked against [`HOOK_EVENTS`] before anything is sent.
//!
//! HTTP is left to the caller: implement [`Transport`] over any client and
//! hand it to [`Hooks`].
//!
//! ```rust
//! use serde_json::json;
//! use vista_github::{request, CreateHook, Method};
//!
//! let hook = CreateHook::new("web", json!({"url": "https://example.com"}))
//!     .events(["push", "pull_request"]);
//! let call = request::create("octo", "hello", &hook).unwrap();
//!
//! assert_eq!(call.method, Method::Post);
//! assert_eq!(call.path, "/repos/octo/hello/hooks");
//! assert_eq!(call.expected_status, 201);
//! ```

mod error;
pub mod events;
mod hooks;
pub mod request;

pub use error::{HooksError, TransportError};
pub use events::{EventList, HOOK_EVENTS};
pub use hooks::{process_response, Hooks, Response, Transport};
pub use request::{CreateHook, EditHook, HookRequest, Method};

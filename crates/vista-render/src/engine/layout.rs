//! Wrapper-layout renderer with `{variable}` substitution.
//!
//! [`LayoutRenderer`] renders two templates per call: the wrapper template
//! (named `default` unless changed) and the requested child template. The
//! child output is then placed into the wrapper output wherever the
//! [`COMPONENT_TOKEN`] appears. This gives one level of template
//! inheritance without a full template language.
//!
//! # Syntax
//!
//! - `{name}` - variable substitution
//! - `{user.name}` - nested property access via dot notation
//! - `{items.0}` - array index access
//! - `{{` and `}}` - escaped braces (render as `{` and `}`)
//!
//! Unknown variables render as an empty string; in debug mode each one is
//! reported with a warning.
//!
//! # Example
//!
//! Given `templates/default.tpl`:
//!
//! ```text
//! <html><title>{title}</title><body>[[component]]</body></html>
//! ```
//!
//! and `templates/article.tpl`:
//!
//! ```text
//! <h1>{title}</h1>
//! ```
//!
//! rendering `article` with `{"title": "News"}` yields
//! `<html><title>News</title><body><h1>News</h1></body></html>`.

use std::borrow::Cow;

use serde_json::Value;

use crate::config::RendererConfig;
use crate::error::RenderError;
use crate::renderer::{Renderer, RendererState};
use crate::Data;

/// Placeholder in the wrapper output replaced by the child output.
pub const COMPONENT_TOKEN: &str = "[[component]]";

/// Name of the wrapper template rendered around every child.
pub const DEFAULT_WRAPPER: &str = "default";

/// Default file extension for layout templates.
pub const LAYOUT_EXTENSION: &str = ".tpl";

/// Renderer that embeds a child template into a wrapper template.
#[derive(Debug, Clone)]
pub struct LayoutRenderer {
    state: RendererState,
    wrapper: String,
}

impl LayoutRenderer {
    /// Creates a layout renderer.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidArgument`] if `templates_base_dir` is empty.
    pub fn new(config: &RendererConfig) -> Result<Self, RenderError> {
        Ok(Self {
            state: RendererState::from_config(config, LAYOUT_EXTENSION)?,
            wrapper: DEFAULT_WRAPPER.to_string(),
        })
    }

    /// Uses `name` instead of `default` as the wrapper template.
    pub fn with_wrapper(mut self, name: impl Into<String>) -> Self {
        self.wrapper = name.into();
        self
    }

    pub fn wrapper(&self) -> &str {
        &self.wrapper
    }
}

impl Renderer for LayoutRenderer {
    fn engine(&self) -> &'static str {
        "layout"
    }

    fn state(&self) -> &RendererState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RendererState {
        &mut self.state
    }

    fn render_current(&mut self) -> Result<String, RenderError> {
        let name = self.state.require_template()?.to_string();
        let debug = self.state.debug();

        // The wrapper is resolved first so a missing wrapper is reported
        // even when the child is also missing.
        let wrapper_source = self.state.load(&self.wrapper)?;
        let wrapper = substitute(&wrapper_source, &self.state.data, debug)?;

        if name == self.wrapper {
            return Ok(wrapper.replace(COMPONENT_TOKEN, ""));
        }

        let child_source = self.state.load(&name)?;
        let child = substitute(&child_source, &self.state.data, debug)?;

        Ok(wrapper.replace(COMPONENT_TOKEN, &child))
    }
}

/// Looks up `name` in `data`.
///
/// The first segment selects a top-level key; the remaining dot-separated
/// segments walk objects and arrays as a JSON pointer would.
fn lookup<'a>(data: &'a Data, name: &str) -> Option<&'a Value> {
    let mut segments = name.split('.');
    let root = data.get(segments.next()?)?;

    let pointer: String = segments
        .map(|seg| format!("/{}", seg.replace('~', "~0").replace('/', "~1")))
        .collect();
    if pointer.is_empty() {
        Some(root)
    } else {
        root.pointer(&pointer)
    }
}

/// Text inserted for a value: strings unquoted, `null` empty, the rest as JSON.
fn display(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

/// Substitutes `{variable}` references in `template` with values from `data`.
///
/// # Errors
///
/// Returns [`RenderError::Template`] for an unclosed or empty placeholder.
pub fn substitute(template: &str, data: &Data, debug: bool) -> Result<String, RenderError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(at) = rest.find(|c: char| c == '{' || c == '}') {
        out.push_str(&rest[..at]);
        let tail = &rest[at..];

        if let Some(after) = tail.strip_prefix("{{") {
            out.push('{');
            rest = after;
        } else if let Some(after) = tail.strip_prefix("}}") {
            out.push('}');
            rest = after;
        } else if let Some(after) = tail.strip_prefix('}') {
            out.push('}');
            rest = after;
        } else {
            let close = tail.find('}').ok_or_else(|| {
                RenderError::Template(format!("Unclosed placeholder: {}", tail))
            })?;
            let name = tail[1..close].trim();
            if name.is_empty() {
                return Err(RenderError::Template("Empty placeholder".to_string()));
            }

            match lookup(data, name) {
                Some(value) => out.push_str(&display(value)),
                None if debug => tracing::warn!(variable = name, "No template var"),
                None => {}
            }
            rest = &tail[close + 1..];
        }
    }

    out.push_str(rest);
    Ok(out)
}

//! Error types for template rendering.
//!
//! [`RenderError`] is the single error type returned by renderers and views.
//! It abstracts over the errors of the underlying template engines so the
//! public API stays the same whichever engine is configured.

use std::path::PathBuf;

/// Error type for rendering operations.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A renderer, layout, search path or template name is missing.
    #[error("not configured: {0}")]
    NotConfigured(String),

    /// No registered search path yields the requested template file.
    ///
    /// When `debug` is set the message also lists every searched path.
    #[error("{}", not_found_message(.name, .searched, .debug))]
    TemplateNotFound {
        /// File name that was looked up, extension included
        name: String,
        /// Search paths in the order they were consulted
        searched: Vec<PathBuf>,
        /// Whether to list the searched paths in the message
        debug: bool,
    },

    /// A setter received a value it cannot bind (e.g. `null`).
    #[error("{0}")]
    InvalidArgument(String),

    /// Template syntax or evaluation failure inside an engine.
    #[error("template error: {0}")]
    Template(String),

    /// Data serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// I/O error while reading a template from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn not_found_message(name: &str, searched: &[PathBuf], debug: &bool) -> String {
    let mut msg = format!("Template file not found: {}", name);
    if *debug {
        msg.push_str("\nRegistered paths:");
        for path in searched {
            msg.push_str("\n  ");
            msg.push_str(&path.display().to_string());
        }
    }
    msg
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for RenderError {
    fn from(err: serde_yaml::Error) -> Self {
        RenderError::Serialization(err.to_string())
    }
}

impl From<minijinja::Error> for RenderError {
    fn from(err: minijinja::Error) -> Self {
        use minijinja::ErrorKind;

        match err.kind() {
            ErrorKind::BadSerialization => RenderError::Serialization(err.to_string()),
            _ => RenderError::Template(err.to_string()),
        }
    }
}

impl From<handlebars::RenderError> for RenderError {
    fn from(err: handlebars::RenderError) -> Self {
        RenderError::Template(err.to_string())
    }
}

impl From<handlebars::TemplateError> for RenderError {
    fn from(err: handlebars::TemplateError) -> Self {
        RenderError::Template(err.to_string())
    }
}

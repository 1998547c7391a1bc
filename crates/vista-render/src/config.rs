//! Renderer configuration.
//!
//! [`RendererConfig`] carries the settings every engine understands. It can
//! be built in code with the `with_*` setters or deserialized from YAML or
//! JSON; omitted keys fall back to their defaults.
//!
//! ```rust
//! use vista_render::RendererConfig;
//!
//! let config = RendererConfig::from_yaml(r#"
//! templates_base_dir: site/templates
//! debug: true
//! "#).unwrap();
//!
//! assert!(config.debug);
//! assert_eq!(config.templates_base_dir.to_str(), Some("site/templates"));
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Settings shared by all renderer engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Base directory for templates.
    ///
    /// Registered as the first search path, and used as prefix for paths
    /// added with `override_base_dir = false`.
    pub templates_base_dir: PathBuf,

    /// Directory holding partial templates (Handlebars only).
    pub partials_base_dir: Option<PathBuf>,

    /// Template file extension. Each engine has its own default.
    pub template_file_ext: Option<String>,

    /// List searched paths in not-found errors and enable engine debug aids.
    pub debug: bool,

    /// Treat undefined template variables as errors.
    pub strict: bool,

    /// Tag delimiters for Jinja templates. Standard Jinja syntax when unset.
    pub delimiters: Option<Delimiters>,
}

/// Opening and closing markers for each kind of Jinja tag.
///
/// ```yaml
/// delimiters:
///   tag_block: ["<%", "%>"]
///   tag_variable: ["${", "}"]
/// ```
///
/// Omitted entries keep their standard values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delimiters {
    pub tag_comment: (String, String),
    pub tag_block: (String, String),
    pub tag_variable: (String, String),
}

impl Default for Delimiters {
    fn default() -> Self {
        Self {
            tag_comment: ("{#".to_string(), "#}".to_string()),
            tag_block: ("{%".to_string(), "%}".to_string()),
            tag_variable: ("{{".to_string(), "}}".to_string()),
        }
    }
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            templates_base_dir: PathBuf::from("templates"),
            partials_base_dir: None,
            template_file_ext: None,
            debug: false,
            strict: false,
            delimiters: None,
        }
    }
}

impl RendererConfig {
    /// Creates a configuration rooted at `templates_base_dir`.
    pub fn new(templates_base_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_base_dir: templates_base_dir.into(),
            ..Self::default()
        }
    }

    /// Parses a configuration from YAML.
    pub fn from_yaml(source: &str) -> Result<Self, RenderError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Parses a configuration from JSON.
    pub fn from_json(source: &str) -> Result<Self, RenderError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_extension(mut self, ext: impl Into<String>) -> Self {
        self.template_file_ext = Some(ext.into());
        self
    }

    pub fn with_delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = Some(delimiters);
        self
    }

    pub fn with_partials_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.partials_base_dir = Some(dir.into());
        self
    }

    /// Returns the configured extension, or `default` when none is set.
    ///
    /// The result always starts with a dot.
    pub fn extension_or(&self, default: &str) -> String {
        let ext = self.template_file_ext.as_deref().unwrap_or(default);
        if ext.starts_with('.') {
            ext.to_string()
        } else {
            format!(".{}", ext)
        }
    }

    /// Fails with [`RenderError::InvalidArgument`] if the base directory is empty.
    pub(crate) fn validate(&self) -> Result<(), RenderError> {
        if self.templates_base_dir.as_os_str().is_empty() {
            return Err(RenderError::InvalidArgument(
                "The \"templates_base_dir\" value must be set in the configuration.".to_string(),
            ));
        }
        Ok(())
    }
}

//! Jinja renderer backed by MiniJinja.
//!
//! Templates use Jinja2 syntax (`{{ var }}`, `{% for %}`, `{% include %}`,
//! `{% extends %}`). The top-level template and every template it pulls in
//! are resolved through the same ordered search paths, so an
//! `{% include "header.twig" %}` picks up the first `header.twig` found.

use minijinja::syntax::SyntaxConfig;
use minijinja::{Environment, ErrorKind, UndefinedBehavior, Value};
use serde_json::Value as JsonValue;

use crate::config::{Delimiters, RendererConfig};
use crate::error::RenderError;
use crate::paths::TemplatePaths;
use crate::renderer::{check_value, Renderer, RendererState};

/// Default file extension for Jinja templates.
pub const JINJA_EXTENSION: &str = ".twig";

/// Renderer delegating to a MiniJinja environment.
pub struct JinjaRenderer {
    state: RendererState,
    env: Environment<'static>,
}

impl JinjaRenderer {
    /// Creates a Jinja renderer.
    ///
    /// `debug` turns on MiniJinja's debug mode (richer error reports and the
    /// `debug()` function); `strict` makes undefined variables an error;
    /// `delimiters` replaces the tag markers.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidArgument`] for an empty base directory or
    /// unusable delimiters.
    pub fn new(config: &RendererConfig) -> Result<Self, RenderError> {
        let state = RendererState::from_config(config, JINJA_EXTENSION)?;

        let mut env = Environment::new();
        env.set_debug(config.debug);
        if config.strict {
            env.set_undefined_behavior(UndefinedBehavior::Strict);
        }
        if let Some(delimiters) = &config.delimiters {
            env.set_syntax(syntax_config(delimiters)?);
        }

        Ok(Self { state, env })
    }

    /// Binds a variable visible to every template, including includes.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidArgument`] if `value` is `null`.
    pub fn add_global(&mut self, key: &str, value: JsonValue) -> Result<&mut Self, RenderError> {
        check_value(&value)?;
        self.env
            .add_global(key.to_string(), Value::from_serialize(&value));
        Ok(self)
    }

    /// Returns the underlying MiniJinja environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns the underlying MiniJinja environment for registering
    /// filters, functions or tests.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }

    /// Points the environment loader at the current search paths.
    ///
    /// Include and extends names that would leave a search directory are
    /// treated as missing.
    fn install_loader(&mut self) {
        let paths = self.state.paths().clone();
        self.env.clear_templates();
        self.env.set_loader(move |name| {
            let Some(path) = paths.find(name) else {
                return Ok(None);
            };
            std::fs::read_to_string(&path).map(Some).map_err(|err| {
                minijinja::Error::new(
                    ErrorKind::InvalidOperation,
                    format!("could not read template {}", path.display()),
                )
                .with_source(err)
            })
        });
    }
}

fn syntax_config(delimiters: &Delimiters) -> Result<SyntaxConfig, RenderError> {
    let (block_start, block_end) = delimiters.tag_block.clone();
    let (variable_start, variable_end) = delimiters.tag_variable.clone();
    let (comment_start, comment_end) = delimiters.tag_comment.clone();

    SyntaxConfig::builder()
        .block_delimiters(block_start, block_end)
        .variable_delimiters(variable_start, variable_end)
        .comment_delimiters(comment_start, comment_end)
        .build()
        .map_err(|err| RenderError::InvalidArgument(format!("Invalid delimiters: {}", err)))
}

impl Renderer for JinjaRenderer {
    fn engine(&self) -> &'static str {
        "jinja"
    }

    fn state(&self) -> &RendererState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RendererState {
        &mut self.state
    }

    fn render_current(&mut self) -> Result<String, RenderError> {
        let name = self.state.require_template()?.to_string();
        let file_name = TemplatePaths::file_name(&name, self.state.extension());
        let source = self.state.load(&name)?;

        self.install_loader();
        self.env.add_template_owned(file_name.clone(), source)?;

        let template = self.env.get_template(&file_name)?;
        Ok(template.render(Value::from_serialize(&self.state.data))?)
    }
}

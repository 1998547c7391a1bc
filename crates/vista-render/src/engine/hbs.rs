//! Mustache-style renderer backed by Handlebars.
//!
//! Templates use Handlebars syntax, a superset of Mustache: `{{name}}`
//! (HTML-escaped), `{{{raw}}}`, `{{#each items}}`, `{{#if flag}}` and
//! partials via `{{> header}}`.
//!
//! Partials live in a separate directory ([`RendererConfig::partials_base_dir`]).
//! Every file there with the template extension is registered under its
//! file stem, and the directory is re-read on each render so edits show up
//! without rebuilding the renderer.

use std::fs;
use std::path::{Path, PathBuf};

use handlebars::Handlebars;

use crate::config::RendererConfig;
use crate::error::RenderError;
use crate::renderer::{Renderer, RendererState};

/// Default file extension for Handlebars templates and partials.
pub const HANDLEBARS_EXTENSION: &str = ".mustache";

/// Renderer delegating to a Handlebars registry.
pub struct HandlebarsRenderer {
    state: RendererState,
    hbs: Handlebars<'static>,
    partials_dir: Option<PathBuf>,
}

impl HandlebarsRenderer {
    /// Creates a Handlebars renderer.
    ///
    /// With `strict` set, a `{{variable}}` missing from the data fails the
    /// render instead of producing an empty string.
    pub fn new(config: &RendererConfig) -> Result<Self, RenderError> {
        let state = RendererState::from_config(config, HANDLEBARS_EXTENSION)?;

        let mut hbs = Handlebars::new();
        hbs.set_strict_mode(config.strict);

        Ok(Self {
            state,
            hbs,
            partials_dir: config.partials_base_dir.clone(),
        })
    }

    pub fn partials_dir(&self) -> Option<&Path> {
        self.partials_dir.as_deref()
    }

    /// Returns the underlying Handlebars registry for registering helpers.
    pub fn registry_mut(&mut self) -> &mut Handlebars<'static> {
        &mut self.hbs
    }

    /// Registers every partial file found in the partials directory.
    ///
    /// Returns the number of partials registered.
    pub fn load_partials(&mut self) -> Result<usize, RenderError> {
        let Some(dir) = self.partials_dir.clone() else {
            return Ok(0);
        };
        if !dir.is_dir() {
            tracing::warn!(
                dir = %dir.display(),
                "partials directory does not exist, skipping"
            );
            return Ok(0);
        }

        let ext = self.state.extension().to_string();
        let mut count = 0;
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(stem) = file_name.strip_suffix(ext.as_str()) else {
                continue;
            };
            let content = fs::read_to_string(&path)?;
            self.hbs.register_partial(stem, content)?;
            count += 1;
        }

        tracing::debug!(dir = %dir.display(), count, "registered partials");
        Ok(count)
    }
}

impl Renderer for HandlebarsRenderer {
    fn engine(&self) -> &'static str {
        "handlebars"
    }

    fn state(&self) -> &RendererState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut RendererState {
        &mut self.state
    }

    fn render_current(&mut self) -> Result<String, RenderError> {
        let name = self.state.require_template()?.to_string();
        let source = self.state.load(&name)?;
        self.load_partials()?;
        Ok(self.hbs.render_template(&source, &self.state.data)?)
    }
}

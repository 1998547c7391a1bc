//! The renderer capability contract.
//!
//! Every engine implements [`Renderer`]. The trait supplies the shared
//! behaviour (search paths, pending template, bound data) on top of a
//! [`RendererState`] each engine owns; engines only provide
//! [`Renderer::render_current`], the actual template evaluation.
//!
//! # Lifecycle
//!
//! A renderer is [`RenderState::Unconfigured`] until at least one search
//! path is registered. Engines built from a [`RendererConfig`] register the
//! base directory on construction, so they start out configured.
//!
//! ```rust,ignore
//! renderer
//!     .add_path("themes/custom")
//!     .set_template("article");
//! renderer.set("title", json!("Hello"))?;
//!
//! let html = renderer.render("", &Data::new())?;
//! ```

use std::path::Path;

use serde_json::Value;

use crate::config::RendererConfig;
use crate::error::RenderError;
use crate::paths::TemplatePaths;
use crate::Data;

/// Whether a renderer can resolve templates yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// No search path registered.
    Unconfigured,
    /// At least one search path registered.
    Configured,
}

/// State shared by every renderer engine.
#[derive(Debug, Clone)]
pub struct RendererState {
    pub(crate) paths: TemplatePaths,
    pub(crate) template: Option<String>,
    pub(crate) data: Data,
    pub(crate) extension: String,
    pub(crate) debug: bool,
}

impl RendererState {
    /// Builds the state for an engine, registering the base directory as
    /// the first search path.
    pub fn from_config(config: &RendererConfig, default_ext: &str) -> Result<Self, RenderError> {
        config.validate()?;

        let mut paths = TemplatePaths::new(&config.templates_base_dir);
        paths.add(&config.templates_base_dir);

        Ok(Self {
            paths,
            template: None,
            data: Data::new(),
            extension: config.extension_or(default_ext),
            debug: config.debug,
        })
    }

    pub fn paths(&self) -> &TemplatePaths {
        &self.paths
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn data(&self) -> &Data {
        &self.data
    }

    /// Extension appended to template names, leading dot included.
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Resolves and reads `name` through the search paths.
    pub fn load(&self, name: &str) -> Result<String, RenderError> {
        self.paths.load(name, &self.extension, self.debug)
    }

    /// Returns the pending template name, failing if nothing can be rendered yet.
    pub fn require_template(&self) -> Result<&str, RenderError> {
        if self.paths.is_empty() {
            return Err(RenderError::NotConfigured(
                "no template paths registered".to_string(),
            ));
        }
        match self.template.as_deref() {
            Some(name) if !name.is_empty() => Ok(name),
            _ => Err(RenderError::NotConfigured(
                "no template selected".to_string(),
            )),
        }
    }
}

/// Rejects values that cannot be bound into a template context.
pub(crate) fn check_value(value: &Value) -> Result<(), RenderError> {
    if value.is_null() {
        return Err(RenderError::InvalidArgument("No value defined.".to_string()));
    }
    Ok(())
}

/// A template engine that turns a template name plus a data bag into a string.
pub trait Renderer: Sized {
    /// Short name of the engine (`"jinja"`, `"handlebars"`, `"layout"`).
    fn engine(&self) -> &'static str;

    fn state(&self) -> &RendererState;

    fn state_mut(&mut self) -> &mut RendererState;

    /// Evaluates the pending template against the bound data.
    fn render_current(&mut self) -> Result<String, RenderError>;

    /// Renders `template` with `data` merged into the bound data.
    ///
    /// An empty `template` keeps the pending template name; an empty `data`
    /// keeps the bound data as is.
    ///
    /// # Errors
    ///
    /// - [`RenderError::InvalidArgument`] if `data` carries a `null` value
    /// - [`RenderError::NotConfigured`] if no path or template is set
    /// - [`RenderError::TemplateNotFound`] if no search path has the file
    fn render(&mut self, template: &str, data: &Data) -> Result<String, RenderError> {
        if !template.is_empty() {
            self.set_template(template);
        }
        if !data.is_empty() {
            self.set_all(data.clone())?;
        }
        self.render_current()
    }

    fn render_state(&self) -> RenderState {
        if self.state().paths.is_empty() {
            RenderState::Unconfigured
        } else {
            RenderState::Configured
        }
    }

    /// Returns the pending template name.
    fn template(&self) -> Option<&str> {
        self.state().template()
    }

    /// Sets the pending template name without checking that it exists.
    fn set_template(&mut self, name: &str) -> &mut Self {
        self.state_mut().template = Some(name.to_string());
        self
    }

    /// Appends a search path verbatim. Already registered paths are ignored.
    fn add_path(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.state_mut().paths.add(path);
        self
    }

    /// Appends several search paths.
    ///
    /// With `override_base_dir` false each path is joined onto the configured
    /// base directory; with true it is used verbatim.
    fn set_templates_paths<I, P>(&mut self, paths: I, override_base_dir: bool) -> &mut Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let state = self.state_mut();
        for path in paths {
            if override_base_dir {
                state.paths.add(path);
            } else {
                state.paths.add_relative(path);
            }
        }
        self
    }

    /// Removes every search path, returning the renderer to `Unconfigured`.
    fn clear_paths(&mut self) -> &mut Self {
        self.state_mut().paths.clear();
        self
    }

    /// Binds one variable.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidArgument`] if `value` is `null`.
    fn set(&mut self, key: &str, value: Value) -> Result<&mut Self, RenderError> {
        check_value(&value)?;
        self.state_mut().data.insert(key.to_string(), value);
        Ok(self)
    }

    /// Merges a whole bag into the bound data.
    ///
    /// The bag is validated before anything is bound, so a rejected bag
    /// leaves the data untouched.
    fn set_all(&mut self, bag: Data) -> Result<&mut Self, RenderError> {
        for value in bag.values() {
            check_value(value)?;
        }
        self.state_mut().data.extend(bag);
        Ok(self)
    }

    /// Removes a bound variable. Absent keys are ignored.
    fn unset_data(&mut self, key: &str) -> &mut Self {
        self.state_mut().data.remove(key);
        self
    }

    /// Returns the bound data.
    fn data(&self) -> &Data {
        self.state().data()
    }
}

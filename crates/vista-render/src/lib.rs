//! # Vista Render - Template renderers with ordered search paths
//!
//! `vista-render` turns a template name plus a data bag into a string. It is
//! the rendering half of the `vista` view layer, and can be used on its own.
//!
//! ## Core Concepts
//!
//! - [`Renderer`]: the capability contract shared by every engine
//! - [`TemplatePaths`]: ordered search directories, first match wins
//! - [`RendererConfig`]: base directory, extension, debug and strict flags
//! - [`EngineKind`] / [`AnyRenderer`]: engine selection from configuration
//! - [`RenderError`]: the single error type for every engine
//!
//! ## Engines
//!
//! - [`JinjaRenderer`]: Jinja2 templates through MiniJinja
//! - [`HandlebarsRenderer`]: Handlebars / Mustache templates with partials
//! - [`LayoutRenderer`]: `{var}` substitution with a `default` wrapper
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use serde_json::json;
//! use vista_render::{AnyRenderer, Data, EngineKind, Renderer, RendererConfig};
//!
//! let config = RendererConfig::new("templates").with_debug(true);
//! let mut renderer = AnyRenderer::new(EngineKind::Jinja, &config).unwrap();
//! renderer.set_templates_paths(["admin"], false); // templates/admin
//!
//! let mut data = Data::new();
//! data.insert("title".into(), json!("Dashboard"));
//!
//! // Looks for templates/index.twig, then templates/admin/index.twig
//! let html = renderer.render("index", &data).unwrap();
//! println!("{}", html);
//! ```

pub mod config;
pub mod engine;
mod error;
pub mod paths;
pub mod renderer;

/// A template data bag: variable name to JSON value.
pub type Data = serde_json::Map<String, serde_json::Value>;

pub use config::{Delimiters, RendererConfig};
pub use engine::{
    substitute, AnyRenderer, EngineKind, HandlebarsRenderer, JinjaRenderer, LayoutRenderer,
    COMPONENT_TOKEN, DEFAULT_WRAPPER, HANDLEBARS_EXTENSION, JINJA_EXTENSION, LAYOUT_EXTENSION,
};
pub use error::RenderError;
pub use paths::TemplatePaths;
pub use renderer::{RenderState, Renderer, RendererState};

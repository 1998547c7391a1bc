//! Renderer engines and configuration-time engine selection.
//!
//! | Engine | Type | Default extension | Syntax |
//! |--------|------|-------------------|--------|
//! | `jinja` (alias `twig`) | [`JinjaRenderer`] | `.twig` | Jinja2 via MiniJinja |
//! | `handlebars` (alias `mustache`) | [`HandlebarsRenderer`] | `.mustache` | Handlebars / Mustache |
//! | `layout` (alias `php`) | [`LayoutRenderer`] | `.tpl` | `{var}` substitution inside a wrapper |
//!
//! The engine is picked once, from configuration, through [`EngineKind`]
//! and [`AnyRenderer`]:
//!
//! ```rust,ignore
//! let kind: EngineKind = "twig".parse()?;
//! let mut renderer = AnyRenderer::new(kind, &RendererConfig::new("templates"))?;
//! let html = renderer.render("index", &data)?;
//! ```

mod hbs;
mod jinja;
mod layout;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::RendererConfig;
use crate::error::RenderError;
use crate::renderer::{Renderer, RendererState};

pub use hbs::{HandlebarsRenderer, HANDLEBARS_EXTENSION};
pub use jinja::{JinjaRenderer, JINJA_EXTENSION};
pub use layout::{substitute, LayoutRenderer, COMPONENT_TOKEN, DEFAULT_WRAPPER, LAYOUT_EXTENSION};

/// The available template engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    #[serde(alias = "twig")]
    Jinja,
    #[serde(alias = "mustache")]
    Handlebars,
    #[serde(alias = "php")]
    Layout,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngineKind::Jinja => "jinja",
            EngineKind::Handlebars => "handlebars",
            EngineKind::Layout => "layout",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EngineKind {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jinja" | "twig" => Ok(EngineKind::Jinja),
            "handlebars" | "mustache" => Ok(EngineKind::Handlebars),
            "layout" | "php" => Ok(EngineKind::Layout),
            other => Err(RenderError::InvalidArgument(format!(
                "unknown template engine: {} (supported: jinja, handlebars, layout)",
                other
            ))),
        }
    }
}

/// A renderer whose engine was chosen from configuration.
pub enum AnyRenderer {
    Jinja(JinjaRenderer),
    Handlebars(HandlebarsRenderer),
    Layout(LayoutRenderer),
}

macro_rules! delegate {
    ($self:expr, $r:ident => $body:expr) => {
        match $self {
            AnyRenderer::Jinja($r) => $body,
            AnyRenderer::Handlebars($r) => $body,
            AnyRenderer::Layout($r) => $body,
        }
    };
}

impl AnyRenderer {
    /// Builds the renderer for `kind`.
    pub fn new(kind: EngineKind, config: &RendererConfig) -> Result<Self, RenderError> {
        tracing::debug!(
            engine = %kind,
            base_dir = %config.templates_base_dir.display(),
            "creating renderer"
        );
        Ok(match kind {
            EngineKind::Jinja => AnyRenderer::Jinja(JinjaRenderer::new(config)?),
            EngineKind::Handlebars => AnyRenderer::Handlebars(HandlebarsRenderer::new(config)?),
            EngineKind::Layout => AnyRenderer::Layout(LayoutRenderer::new(config)?),
        })
    }

    pub fn kind(&self) -> EngineKind {
        match self {
            AnyRenderer::Jinja(_) => EngineKind::Jinja,
            AnyRenderer::Handlebars(_) => EngineKind::Handlebars,
            AnyRenderer::Layout(_) => EngineKind::Layout,
        }
    }
}

impl From<JinjaRenderer> for AnyRenderer {
    fn from(renderer: JinjaRenderer) -> Self {
        AnyRenderer::Jinja(renderer)
    }
}

impl From<HandlebarsRenderer> for AnyRenderer {
    fn from(renderer: HandlebarsRenderer) -> Self {
        AnyRenderer::Handlebars(renderer)
    }
}

impl From<LayoutRenderer> for AnyRenderer {
    fn from(renderer: LayoutRenderer) -> Self {
        AnyRenderer::Layout(renderer)
    }
}

impl Renderer for AnyRenderer {
    fn engine(&self) -> &'static str {
        delegate!(self, r => r.engine())
    }

    fn state(&self) -> &RendererState {
        delegate!(self, r => r.state())
    }

    fn state_mut(&mut self) -> &mut RendererState {
        delegate!(self, r => r.state_mut())
    }

    fn render_current(&mut self) -> Result<String, RenderError> {
        delegate!(self, r => r.render_current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Data;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_engine_kind_from_str_aliases() {
        assert_eq!("twig".parse::<EngineKind>().unwrap(), EngineKind::Jinja);
        assert_eq!("Mustache".parse::<EngineKind>().unwrap(), EngineKind::Handlebars);
        assert_eq!("php".parse::<EngineKind>().unwrap(), EngineKind::Layout);
        assert!(matches!(
            "smarty".parse::<EngineKind>(),
            Err(RenderError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_engine_kind_deserialize_alias() {
        let kind: EngineKind = serde_yaml::from_str("twig").unwrap();
        assert_eq!(kind, EngineKind::Jinja);
        let kind: EngineKind = serde_json::from_str("\"handlebars\"").unwrap();
        assert_eq!(kind, EngineKind::Handlebars);
    }

    #[test]
    fn test_any_renderer_reports_engine() {
        let dir = TempDir::new().unwrap();
        let config = RendererConfig::new(dir.path());
        for kind in [EngineKind::Jinja, EngineKind::Handlebars, EngineKind::Layout] {
            let renderer = AnyRenderer::new(kind, &config).unwrap();
            assert_eq!(renderer.kind(), kind);
            assert_eq!(renderer.engine(), kind.as_str());
        }
    }

    #[test]
    fn test_any_renderer_delegates_render() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("hi.twig"), "hi {{ who }}").unwrap();

        let mut renderer = AnyRenderer::new(EngineKind::Jinja, &RendererConfig::new(dir.path())).unwrap();
        let mut bag = Data::new();
        bag.insert("who".into(), json!("there"));
        assert_eq!(renderer.render("hi", &bag).unwrap(), "hi there");
    }

    #[test]
    fn test_any_renderer_chaining_uses_shared_state() {
        let dir = TempDir::new().unwrap();
        let mut renderer = AnyRenderer::new(EngineKind::Layout, &RendererConfig::new(dir.path())).unwrap();
        renderer.add_path("/extra").set_template("page");
        assert_eq!(renderer.template(), Some("page"));
        assert_eq!(renderer.state().paths().len(), 2);
    }
}

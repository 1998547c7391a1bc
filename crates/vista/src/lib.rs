//! # Vista - Views that delegate to template renderers
//!
//! A view holds a data bag and knows how to turn it into output. [`HtmlView`]
//! hands its data and a layout name to a [`Renderer`]; [`JsonView`] serializes
//! the data directly.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use serde_json::json;
//! use vista::{AnyRenderer, EngineKind, HtmlView, RendererConfig, View};
//!
//! let config = RendererConfig::new("templates");
//! let renderer = AnyRenderer::new(EngineKind::Handlebars, &config).unwrap();
//!
//! let mut view = HtmlView::new(renderer);
//! view.set_layout("article");
//! view.add_data("title", json!("Hello"));
//!
//! // templates/article.mustache
//! println!("{}", view.render_or_message());
//! ```
//!
//! The renderer crate is re-exported, so most users only depend on `vista`.

mod data;
mod html;
mod json;
mod paths;
mod view;

pub use data::ViewData;
pub use html::{HtmlView, DEFAULT_LAYOUT};
pub use json::JsonView;
pub use paths::LayoutPaths;
pub use view::View;

pub use vista_render;
pub use vista_render::{
    AnyRenderer, Data, EngineKind, HandlebarsRenderer, JinjaRenderer, LayoutRenderer, RenderError,
    RenderState, Renderer, RendererConfig, TemplatePaths,
};

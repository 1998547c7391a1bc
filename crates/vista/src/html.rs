//! HTML view backed by a template renderer.
//!
//! [`HtmlView`] pairs a [`ViewData`] bag with a layout name and hands both to
//! its [`Renderer`] on [`render`](View::render). The layout defaults to
//! `"default"`.
//!
//! ```rust,ignore
//! let renderer = AnyRenderer::new(EngineKind::Jinja, &RendererConfig::new("templates"))?;
//! let mut view = HtmlView::new(renderer);
//! view.set_layout("article")
//!     .add_data("title", json!("Hello"));
//!
//! let html = view.render()?; // templates/article.twig
//! ```

use std::path::PathBuf;

use vista_render::{AnyRenderer, Data, RenderError, Renderer};

use crate::data::ViewData;
use crate::paths::LayoutPaths;
use crate::view::View;

/// Layout used when none is set.
pub const DEFAULT_LAYOUT: &str = "default";

/// A view rendered through a template engine.
pub struct HtmlView<R = AnyRenderer> {
    data: ViewData,
    layout: String,
    renderer: Option<R>,
    paths: LayoutPaths,
    // keys this view bound into the renderer on its last render
    bound: Vec<String>,
}

impl<R: Renderer> HtmlView<R> {
    /// Creates a view rendering through `renderer`.
    pub fn new(renderer: R) -> Self {
        Self {
            renderer: Some(renderer),
            ..Self::detached()
        }
    }

    /// Creates a view with initial data.
    pub fn with_data(renderer: R, data: Data) -> Self {
        Self {
            data: ViewData::from(data),
            ..Self::new(renderer)
        }
    }

    /// Creates a view without a renderer. Rendering fails until one is set.
    pub fn detached() -> Self {
        Self {
            data: ViewData::new(),
            layout: DEFAULT_LAYOUT.to_string(),
            renderer: None,
            paths: LayoutPaths::new(),
            bound: Vec::new(),
        }
    }

    pub fn layout(&self) -> &str {
        &self.layout
    }

    pub fn set_layout(&mut self, layout: impl Into<String>) -> &mut Self {
        self.layout = layout.into();
        self
    }

    pub fn renderer(&self) -> Option<&R> {
        self.renderer.as_ref()
    }

    pub fn renderer_mut(&mut self) -> Option<&mut R> {
        self.renderer.as_mut()
    }

    pub fn set_renderer(&mut self, renderer: R) -> &mut Self {
        self.renderer = Some(renderer);
        self.bound.clear();
        self
    }

    /// Removes and returns the renderer.
    pub fn take_renderer(&mut self) -> Option<R> {
        self.bound.clear();
        self.renderer.take()
    }

    /// Layout directories, highest priority first.
    pub fn paths(&self) -> &LayoutPaths {
        &self.paths
    }

    pub fn paths_mut(&mut self) -> &mut LayoutPaths {
        &mut self.paths
    }

    pub fn set_paths(&mut self, paths: LayoutPaths) -> &mut Self {
        self.paths = paths;
        self
    }

    /// Locates `<layout>.<ext>` in the layout directories without rendering it.
    ///
    /// `ext` may be given with or without its leading dot.
    pub fn path(&self, layout: &str, ext: &str) -> Option<PathBuf> {
        let ext = ext.trim_start_matches('.');
        let file = if ext.is_empty() {
            layout.to_string()
        } else {
            format!("{}.{}", layout, ext)
        };
        self.paths.find(&file)
    }

    /// Escapes `&`, `<`, `>` and `"` for safe inclusion in HTML.
    ///
    /// Single quotes are left as is.
    pub fn escape(output: &str) -> String {
        escape_html(output)
    }
}

impl<R: Renderer> View for HtmlView<R> {
    fn data(&self) -> &ViewData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut ViewData {
        &mut self.data
    }

    /// Renders the layout through the renderer.
    ///
    /// The view's data is merged into the renderer's bound data. Keys this
    /// view bound on a previous render and has since removed are unbound
    /// first; variables set on the renderer directly are left alone.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::NotConfigured`] if no renderer is set or the
    /// layout is empty; otherwise whatever the renderer reports.
    fn render(&mut self) -> Result<String, RenderError> {
        let renderer = self
            .renderer
            .as_mut()
            .ok_or_else(|| RenderError::NotConfigured("no renderer set on view".to_string()))?;
        if self.layout.is_empty() {
            return Err(RenderError::NotConfigured(
                "no layout set on view".to_string(),
            ));
        }

        let current = self.data.get();
        for key in self.bound.iter().filter(|key| !current.contains_key(key.as_str())) {
            renderer.unset_data(key);
        }
        self.bound = current.keys().cloned().collect();

        tracing::debug!(
            engine = renderer.engine(),
            layout = %self.layout,
            keys = self.data.len(),
            "rendering view"
        );
        renderer.render(&self.layout, self.data.get())
    }
}

pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

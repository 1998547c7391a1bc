//! JSON view: the data bag serialized as a JSON object.

use vista_render::{Data, RenderError};

use crate::data::ViewData;
use crate::view::View;

/// A view that renders its data as JSON, without a template engine.
#[derive(Debug, Clone, Default)]
pub struct JsonView {
    data: ViewData,
    pretty: bool,
}

impl JsonView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(data: Data) -> Self {
        Self {
            data: ViewData::from(data),
            pretty: false,
        }
    }

    /// Switches to indented output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }
}

impl View for JsonView {
    fn data(&self) -> &ViewData {
        &self.data
    }

    fn data_mut(&mut self) -> &mut ViewData {
        &mut self.data
    }

    fn render(&mut self) -> Result<String, RenderError> {
        let output = if self.pretty {
            serde_json::to_string_pretty(&self.data)?
        } else {
            serde_json::to_string(&self.data)?
        };
        Ok(output)
    }
}

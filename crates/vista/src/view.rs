//! The view contract.

use serde_json::Value;
use vista_render::{Data, RenderError};

use crate::data::ViewData;

/// A data-holding object that can render itself.
pub trait View {
    fn data(&self) -> &ViewData;

    fn data_mut(&mut self) -> &mut ViewData;

    /// Renders the view.
    fn render(&mut self) -> Result<String, RenderError>;

    /// Renders the view, returning the error message instead of failing.
    ///
    /// Meant for presentation boundaries that must always produce text.
    fn render_or_message(&mut self) -> String {
        match self.render() {
            Ok(output) => output,
            Err(err) => {
                tracing::debug!(error = %err, "view render failed, emitting message");
                err.to_string()
            }
        }
    }

    fn add_data(&mut self, key: impl Into<String>, value: Value) -> &mut Self
    where
        Self: Sized,
    {
        self.data_mut().add(key, value);
        self
    }

    fn remove_data(&mut self, key: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.data_mut().remove(key);
        self
    }

    fn clear_data(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self.data_mut().clear();
        self
    }

    /// Merges `bag` into the view data.
    fn set_data(&mut self, bag: Data) -> &mut Self
    where
        Self: Sized,
    {
        self.data_mut().set(bag);
        self
    }

    fn get_data(&self) -> &Data {
        self.data().get()
    }
}

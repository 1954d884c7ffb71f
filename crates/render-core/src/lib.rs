//! Text rendering for markup trees.
//!
//! The entry point is [`render`] (or the [`Render`] extension trait): it walks
//! a component's expanded tree recursively and produces the final document
//! text. Indentation is opt-in; without it the output is a single line.

mod buffer;
mod escape;
mod renderer;

pub use escape::escape;

use plume_markup::Component;
use plume_types::Indentation;

use crate::renderer::Renderer;

/// Render a component into its final document text.
///
/// Passing an [`Indentation`] pretty-prints the output: nested elements each
/// land on their own line, indented one unit per nesting level. Passing `None`
/// renders everything on a single line.
pub fn render(component: &dyn Component, indentation: Option<Indentation>) -> String {
    log::trace!("rendering component tree (indentation: {indentation:?})");
    let mut renderer = Renderer::new(indentation);
    renderer.render_component_at_root(component);
    let output = renderer.into_result();
    log::debug!("render complete: {} bytes", output.len());
    output
}

/// Rendering entry points available on every component.
pub trait Render {
    /// Render on a single line.
    fn render(&self) -> String;

    /// Render pretty-printed with the given indentation.
    fn render_indented(&self, indentation: Indentation) -> String;
}

impl<T: Component> Render for T {
    fn render(&self) -> String {
        render(self, None)
    }

    fn render_indented(&self, indentation: Indentation) -> String {
        render(self, Some(indentation))
    }
}

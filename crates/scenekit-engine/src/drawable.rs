// Imports
use piet::RenderContext;

/// Trait for types that can draw themselves on a [piet::RenderContext].
pub trait Drawable {
    /// Draw itself.
    ///
    /// The implementors are expected to save/restore the drawing context.
    fn draw(&self, cx: &mut impl RenderContext) -> anyhow::Result<()>;
}

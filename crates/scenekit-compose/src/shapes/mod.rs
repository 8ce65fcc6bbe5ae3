// Modules
mod circle;
mod ellipse;
/// layout groups
pub mod group;
mod line;
mod polygon;
mod progressbar;
mod rect;
mod shape;
mod shapeable;

// Re-exports
pub use circle::Circle;
pub use ellipse::Ellipse;
pub use group::{Arrangement, Group};
pub use line::Line;
pub use polygon::Polygon;
pub use progressbar::ProgressBar;
pub use rect::Rect;
pub use shape::Shape;
pub use shapeable::Shapeable;

/// The accuracy used when flattening curves into outline paths.
const PATH_TOLERANCE: f64 = 0.1;

/// Implements the coordinate accessors for resizable shape kinds.
macro_rules! impl_shape_coords {
    ($($kind:ty),* $(,)?) => {
        $(
            impl crate::ext::Coords for $kind {
                fn xy(&self) -> (f64, f64) {
                    let transform = crate::transform::Resizable::transform(self);
                    (transform.x, transform.y)
                }
            }

            impl crate::ext::RectCoords for $kind {
                fn rect_coords(&self) -> (f64, f64, f64, f64) {
                    let transform = crate::transform::Resizable::transform(self);
                    crate::ext::RectCoords::rect_coords(&transform)
                }
            }
        )*
    };
}

impl_shape_coords!(Rect, Line, Circle, Ellipse, Polygon, ProgressBar, Shape);

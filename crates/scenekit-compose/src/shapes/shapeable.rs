// Imports
use crate::ext::Coords;
use crate::kurbo;
use crate::transform::Resizable;
use p2d::bounding_volume::Aabb;

/// Types that behave as a shape.
pub trait Shapeable: Resizable {
    /// The bounds of the shape.
    fn bounds(&self) -> Aabb {
        self.transform().bounds()
    }
    /// Generate the path of its outline as a [kurbo::BezPath].
    fn outline_path(&self) -> kurbo::BezPath;
    /// Whether the point lies inside the shape.
    fn collide_point(&self, point: impl Coords) -> bool;
    /// Per-frame behaviour hook, run once per frame before the timeline updates.
    fn loop_behavior(&mut self) {}
}

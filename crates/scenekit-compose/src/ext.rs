// Imports
use crate::kurbo;
use crate::Point;
use p2d::bounding_volume::Aabb;

/// Types the geometry functions can extract a `(x, y)` coordinate pair from.
///
/// Structured values (points, shapes) and plain pairs are accepted interchangeably.
pub trait Coords {
    /// The x and y coordinate.
    fn xy(&self) -> (f64, f64);

    /// The coordinates as [Point].
    fn to_point(&self) -> Point {
        let (x, y) = self.xy();
        Point::new(x, y)
    }
}

impl<T> Coords for &T
where
    T: Coords + ?Sized,
{
    fn xy(&self) -> (f64, f64) {
        (**self).xy()
    }
}

impl Coords for Point {
    fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

impl Coords for (f64, f64) {
    fn xy(&self) -> (f64, f64) {
        *self
    }
}

impl Coords for [f64; 2] {
    fn xy(&self) -> (f64, f64) {
        (self[0], self[1])
    }
}

impl Coords for na::Vector2<f64> {
    fn xy(&self) -> (f64, f64) {
        (self[0], self[1])
    }
}

impl Coords for na::Point2<f64> {
    fn xy(&self) -> (f64, f64) {
        (self[0], self[1])
    }
}

impl Coords for kurbo::Point {
    fn xy(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Types the geometry functions can extract a box `(x, y, x2, y2)` from.
pub trait RectCoords {
    /// The upper-left and lower-right corner coordinates `(x, y, x2, y2)`.
    fn rect_coords(&self) -> (f64, f64, f64, f64);
}

impl RectCoords for (f64, f64, f64, f64) {
    fn rect_coords(&self) -> (f64, f64, f64, f64) {
        *self
    }
}

impl RectCoords for [f64; 4] {
    fn rect_coords(&self) -> (f64, f64, f64, f64) {
        (self[0], self[1], self[2], self[3])
    }
}

impl RectCoords for Aabb {
    fn rect_coords(&self) -> (f64, f64, f64, f64) {
        (self.mins[0], self.mins[1], self.maxs[0], self.maxs[1])
    }
}

impl RectCoords for kurbo::Rect {
    fn rect_coords(&self) -> (f64, f64, f64, f64) {
        (self.x0, self.y0, self.x1, self.y1)
    }
}

/// Extension trait for [p2d::bounding_volume::Aabb].
pub trait AabbExt
where
    Self: Sized,
{
    /// New Aabb, ensuring its mins, maxs are valid (maxs >= mins)
    fn new_positive(start: na::Point2<f64>, end: na::Point2<f64>) -> Self;
    /// Converts to kurbo Rect
    fn to_kurbo_rect(&self) -> kurbo::Rect;
}

impl AabbExt for Aabb {
    fn new_positive(start: na::Point2<f64>, end: na::Point2<f64>) -> Self {
        Aabb::new(
            na::point![start[0].min(end[0]), start[1].min(end[1])],
            na::point![start[0].max(end[0]), start[1].max(end[1])],
        )
    }

    fn to_kurbo_rect(&self) -> kurbo::Rect {
        kurbo::Rect::new(self.mins[0], self.mins[1], self.maxs[0], self.maxs[1])
    }
}

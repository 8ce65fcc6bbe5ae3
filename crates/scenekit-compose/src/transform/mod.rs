// Modules
mod resizable;

// Re-exports
pub use resizable::Resizable;

// Imports
use crate::ext::{AabbExt, RectCoords};
use p2d::bounding_volume::Aabb;
use serde::{Deserialize, Serialize};

/// The box of a shape: the upper-left corner and the extents.
///
/// `x2` and `y2` are derived, so `x2 == x + width` and `y2 == y + height` hold at any time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "transform")]
pub struct Transform {
    /// The x coordinate of the upper-left corner.
    #[serde(rename = "x")]
    pub x: f64,
    /// The y coordinate of the upper-left corner.
    #[serde(rename = "y")]
    pub y: f64,
    /// The width. May be negative for lines pointing to the left.
    #[serde(rename = "width")]
    pub width: f64,
    /// The height. May be negative for lines pointing upwards.
    #[serde(rename = "height")]
    pub height: f64,
}

impl Transform {
    /// A new transform.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The right x coordinate.
    pub fn x2(&self) -> f64 {
        self.x + self.width
    }

    /// The bottom y coordinate.
    pub fn y2(&self) -> f64 {
        self.y + self.height
    }

    /// The center of the box.
    pub fn center(&self) -> crate::Point {
        crate::Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// The bounds as [Aabb], ensuring positive extents.
    pub fn bounds(&self) -> Aabb {
        Aabb::new_positive(
            na::point![self.x, self.y],
            na::point![self.x2(), self.y2()],
        )
    }

    /// Convert to a kurbo rect.
    pub fn to_kurbo_rect(&self) -> crate::kurbo::Rect {
        crate::kurbo::Rect::new(self.x, self.y, self.x2(), self.y2())
    }
}

impl RectCoords for Transform {
    fn rect_coords(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.x2(), self.y2())
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "<x: {}, y: {}, width: {}, height: {}>",
            self.x, self.y, self.width, self.height
        )
    }
}

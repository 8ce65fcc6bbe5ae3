// Imports
use super::{Shapeable, PATH_TOLERANCE};
use crate::geometry::collision;
use crate::ext::Coords;
use crate::layout::Alignment;
use crate::transform::{Resizable, Transform};
use crate::kurbo;
use serde::{Deserialize, Serialize};

/// A box with an alignment policy per axis.
///
/// Every other shape kind embeds one. Changing the width or height asks the axis alignment for a compensating
/// position delta, which the owning shape then applies through its own `move_x` / `move_y`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "rect")]
pub struct Rect {
    #[serde(rename = "transform")]
    transform: Transform,
    #[serde(rename = "x_mode")]
    x_mode: Alignment,
    #[serde(rename = "y_mode")]
    y_mode: Alignment,
}

impl Rect {
    /// A new rect.
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        x_mode: impl Into<Alignment>,
        y_mode: impl Into<Alignment>,
    ) -> Self {
        Self::from_transform(Transform::new(x, y, width, height), x_mode, y_mode)
    }

    /// A new rect from a transform.
    pub fn from_transform(
        transform: Transform,
        x_mode: impl Into<Alignment>,
        y_mode: impl Into<Alignment>,
    ) -> Self {
        Self {
            transform,
            x_mode: x_mode.into(),
            y_mode: y_mode.into(),
        }
    }

    /// The box.
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// The alignment along the x-axis.
    pub fn x_mode(&self) -> Alignment {
        self.x_mode
    }

    /// The alignment along the y-axis.
    pub fn y_mode(&self) -> Alignment {
        self.y_mode
    }

    /// Place the x coordinate without any further updates.
    pub(crate) fn place_x(&mut self, x: f64) {
        self.transform.x = x;
    }

    /// Place the y coordinate without any further updates.
    pub(crate) fn place_y(&mut self, y: f64) {
        self.transform.y = y;
    }

    /// Place the width without any alignment compensation.
    pub(crate) fn place_width(&mut self, width: f64) {
        self.transform.width = width;
    }

    /// Place the height without any alignment compensation.
    pub(crate) fn place_height(&mut self, height: f64) {
        self.transform.height = height;
    }

    /// Set the width and return the position delta the x-axis alignment requests. The delta is not applied.
    #[must_use]
    pub(crate) fn resize_width(&mut self, width: f64) -> f64 {
        let d_width = width - self.transform.width;
        self.transform.width = width;
        self.x_mode.resize_compensation(d_width)
    }

    /// Set the height and return the position delta the y-axis alignment requests. The delta is not applied.
    #[must_use]
    pub(crate) fn resize_height(&mut self, height: f64) -> f64 {
        let d_height = height - self.transform.height;
        self.transform.height = height;
        self.y_mode.resize_compensation(d_height)
    }
}

impl Resizable for Rect {
    fn rect(&self) -> &Rect {
        self
    }

    fn modes_mut(&mut self) -> (&mut Alignment, &mut Alignment) {
        (&mut self.x_mode, &mut self.y_mode)
    }

    fn set_x(&mut self, x: f64) {
        self.place_x(x);
    }

    fn set_y(&mut self, y: f64) {
        self.place_y(y);
    }

    fn set_width(&mut self, width: f64) {
        let dx = self.resize_width(width);
        self.move_x(dx);
    }

    fn set_height(&mut self, height: f64) {
        let dy = self.resize_height(height);
        self.move_y(dy);
    }
}

impl Shapeable for Rect {
    fn outline_path(&self) -> kurbo::BezPath {
        kurbo::Shape::to_path(&self.transform.to_kurbo_rect(), PATH_TOLERANCE)
    }

    fn collide_point(&self, point: impl Coords) -> bool {
        collision::rect_point(self, point)
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect{}", self.transform)
    }
}

// Imports
use super::{Rect, Shapeable, PATH_TOLERANCE};
use crate::ext::Coords;
use crate::geometry::collision;
use crate::kurbo;
use crate::layout::Alignment;
use crate::transform::Resizable;
use crate::Point;
use serde::{Deserialize, Serialize};

/// A circle inside its square box, `width == height == 2 * radius`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CircleDef", into = "CircleDef")]
pub struct Circle {
    rect: Rect,
    radius: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default, rename = "circle")]
struct CircleDef {
    #[serde(rename = "x")]
    x: f64,
    #[serde(rename = "y")]
    y: f64,
    #[serde(rename = "radius")]
    radius: f64,
    #[serde(rename = "x_mode")]
    x_mode: Alignment,
    #[serde(rename = "y_mode")]
    y_mode: Alignment,
}

impl From<CircleDef> for Circle {
    fn from(def: CircleDef) -> Self {
        Self::new(def.x, def.y, def.radius, def.x_mode, def.y_mode)
    }
}

impl From<Circle> for CircleDef {
    fn from(circle: Circle) -> Self {
        Self {
            x: circle.x(),
            y: circle.y(),
            radius: circle.radius,
            x_mode: circle.x_mode(),
            y_mode: circle.y_mode(),
        }
    }
}

impl Circle {
    /// A new circle with its box starting at `(x, y)`.
    pub fn new(
        x: f64,
        y: f64,
        radius: f64,
        x_mode: impl Into<Alignment>,
        y_mode: impl Into<Alignment>,
    ) -> Self {
        Self {
            rect: Rect::new(x, y, radius * 2.0, radius * 2.0, x_mode, y_mode),
            radius,
        }
    }

    /// The radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The center.
    pub fn middle_pos(&self) -> Point {
        Point::new(self.x() + self.radius, self.y() + self.radius)
    }

    /// Move the circle so that its center lies at `(x, y)`.
    pub fn set_middle_pos(&mut self, x: f64, y: f64) {
        self.set_pos(x - self.radius, y - self.radius);
    }

    /// Set the radius. The box is resized accordingly, respecting the alignments.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        let dx = self.rect.resize_width(radius * 2.0);
        let dy = self.rect.resize_height(radius * 2.0);
        self.move_by(dx, dy);
    }

    /// Change the radius by `d_radius`.
    pub fn move_radius(&mut self, d_radius: f64) {
        self.set_radius(self.radius + d_radius);
    }
}

impl Resizable for Circle {
    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn modes_mut(&mut self) -> (&mut Alignment, &mut Alignment) {
        self.rect.modes_mut()
    }

    fn set_x(&mut self, x: f64) {
        self.rect.set_x(x);
    }

    fn set_y(&mut self, y: f64) {
        self.rect.set_y(y);
    }

    /// Sets the radius to half the width.
    fn set_width(&mut self, width: f64) {
        self.set_radius(width * 0.5);
    }

    /// Sets the radius to half the height.
    fn set_height(&mut self, height: f64) {
        self.set_radius(height * 0.5);
    }

    /// Fits the inscribed circle, using the smaller of both extents.
    fn set_size(&mut self, width: f64, height: f64) {
        self.set_radius(width.min(height) * 0.5);
    }

    fn move_width(&mut self, d_width: f64) {
        self.move_radius(d_width * 0.5);
    }

    fn move_height(&mut self, d_height: f64) {
        self.move_radius(d_height * 0.5);
    }

    fn move_size(&mut self, d_width: f64, d_height: f64) {
        self.move_radius(d_width.min(d_height) * 0.5);
    }
}

impl Shapeable for Circle {
    fn outline_path(&self) -> kurbo::BezPath {
        kurbo::Shape::to_path(
            &kurbo::Circle::new(self.middle_pos().to_kurbo_point(), self.radius),
            PATH_TOLERANCE,
        )
    }

    fn collide_point(&self, point: impl Coords) -> bool {
        collision::circle_point(self, point)
    }
}

// Imports
use super::{Rect, Shapeable, PATH_TOLERANCE};
use crate::ext::Coords;
use crate::geometry::collision;
use crate::kurbo;
use crate::layout::Alignment;
use crate::transform::Resizable;
use serde::{Deserialize, Serialize};

/// An ellipse inscribed into its box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "ellipse")]
pub struct Ellipse {
    #[serde(rename = "rect")]
    rect: Rect,
}

impl Ellipse {
    /// A new ellipse.
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        x_mode: impl Into<Alignment>,
        y_mode: impl Into<Alignment>,
    ) -> Self {
        Self {
            rect: Rect::new(x, y, width, height, x_mode, y_mode),
        }
    }
}

impl Resizable for Ellipse {
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

    fn set_width(&mut self, width: f64) {
        self.rect.set_width(width);
    }

    fn set_height(&mut self, height: f64) {
        self.rect.set_height(height);
    }
}

impl Shapeable for Ellipse {
    fn outline_path(&self) -> kurbo::BezPath {
        kurbo::Shape::to_path(
            &kurbo::Ellipse::from_rect(self.transform().to_kurbo_rect()),
            PATH_TOLERANCE,
        )
    }

    fn collide_point(&self, point: impl Coords) -> bool {
        collision::rect_point(self, point)
    }
}

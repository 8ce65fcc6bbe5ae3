// Imports
use super::{Rect, Shapeable};
use crate::ext::Coords;
use crate::geometry::{self, collision, GeometryError};
use crate::kurbo;
use crate::layout::Alignment;
use crate::transform::Resizable;
use serde::{Deserialize, Serialize};

/// A line from `(x, y)` to `(x2, y2)`. Width and height may be negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "line")]
pub struct Line {
    #[serde(rename = "rect")]
    rect: Rect,
}

impl Line {
    /// A new line.
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

    /// A new line starting at `(x, y)` with the given length and angle in radians.
    pub fn from_angle(
        x: f64,
        y: f64,
        length: f64,
        angle: f64,
        x_mode: impl Into<Alignment>,
        y_mode: impl Into<Alignment>,
    ) -> Self {
        let (width, height) = geometry::get_dimensions(angle, length);
        Self::new(x, y, width, height, x_mode, y_mode)
    }

    /// A new line between two points.
    pub fn from_points(
        x: f64,
        y: f64,
        x2: f64,
        y2: f64,
        x_mode: impl Into<Alignment>,
        y_mode: impl Into<Alignment>,
    ) -> Self {
        Self::new(x, y, x2 - x, y2 - y, x_mode, y_mode)
    }

    /// The start point.
    pub fn start(&self) -> crate::Point {
        crate::Point::new(self.x(), self.y())
    }

    /// The end point.
    pub fn end(&self) -> crate::Point {
        crate::Point::new(self.x2(), self.y2())
    }

    /// The length.
    pub fn length(&self) -> f64 {
        geometry::distance(self.start(), self.end())
    }

    /// The angle in radians, see [geometry::angle].
    pub fn angle(&self) -> f64 {
        geometry::angle(self.start(), self.end())
    }

    /// Point the line towards the angle, keeping its length.
    pub fn set_angle(&mut self, angle: f64) {
        let (width, height) = geometry::get_dimensions(angle, self.length());
        self.set_size(width, height);
    }

    /// Change the length, keeping the direction. Fails for a line of zero length.
    pub fn set_length(&mut self, length: f64) -> Result<(), GeometryError> {
        let (width, height) = geometry::get_dimensions2(self.start(), self.end(), length)?;
        self.set_size(width, height);
        Ok(())
    }
}

impl Resizable for Line {
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

impl Shapeable for Line {
    fn outline_path(&self) -> kurbo::BezPath {
        kurbo::BezPath::from_vec(vec![
            kurbo::PathEl::MoveTo(self.start().to_kurbo_point()),
            kurbo::PathEl::LineTo(self.end().to_kurbo_point()),
        ])
    }

    fn collide_point(&self, point: impl Coords) -> bool {
        collision::rect_point(&self.transform().bounds(), point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AlignMode;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn angle_and_length() {
        let mut line =
            Line::from_points(0.0, 0.0, 3.0, -4.0, AlignMode::Default, AlignMode::Default);
        assert_relative_eq!(line.length(), 5.0);
        assert_relative_eq!(line.x2(), 3.0);
        assert_relative_eq!(line.y2(), -4.0);

        line.set_length(10.0).unwrap();
        assert_relative_eq!(line.width(), 6.0);
        assert_relative_eq!(line.height(), -8.0);

        line.set_angle(FRAC_PI_2);
        assert_relative_eq!(line.width(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(line.height(), -10.0, epsilon = 1e-9);
        assert_relative_eq!(line.angle(), FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn leftward_line_points_at_pi() {
        let mut line =
            Line::from_points(5.0, 2.0, 1.0, 2.0, AlignMode::Default, AlignMode::Default);
        assert_relative_eq!(line.angle(), PI);

        line.set_length(8.0).unwrap();
        assert_relative_eq!(line.width(), -8.0, epsilon = 1e-9);
        assert_relative_eq!(line.height(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_length_has_no_direction() {
        let mut point = Line::new(4.0, 4.0, 0.0, 0.0, AlignMode::Default, AlignMode::Default);
        assert_eq!(point.set_length(3.0), Err(GeometryError::DegenerateVector));
    }

    #[test]
    fn from_angle() {
        let line = Line::from_angle(1.0, 1.0, 2.0, 0.0, AlignMode::Default, AlignMode::Default);
        assert_relative_eq!(line.x2(), 3.0);
        assert_relative_eq!(line.y2(), 1.0);
    }

    #[test]
    fn collides_inside_its_bounds() {
        let line = Line::from_points(10.0, 10.0, 0.0, 0.0, AlignMode::Default, AlignMode::Default);
        assert!(line.collide_point((5.0, 5.0)));
        assert!(!line.collide_point((11.0, 5.0)));
    }
}

// Imports
use crate::geometry;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};

/// A point without visual representation in two-dimensional space.
///
/// The y-axis points downwards (screen convention).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "point")]
pub struct Point {
    /// The x coordinate.
    #[serde(rename = "x")]
    pub x: f64,
    /// The y coordinate.
    #[serde(rename = "y")]
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// A new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Set the x coordinate.
    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    /// Set the y coordinate.
    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Set both coordinates.
    pub fn set_pos(&mut self, x: f64, y: f64) {
        self.set_x(x);
        self.set_y(y);
    }

    /// Move the x coordinate by `dx`.
    pub fn move_x(&mut self, dx: f64) {
        self.set_x(self.x + dx);
    }

    /// Move the y coordinate by `dy`.
    pub fn move_y(&mut self, dy: f64) {
        self.set_y(self.y + dy);
    }

    /// Move both coordinates.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        self.set_pos(self.x + dx, self.y + dy);
    }

    /// Rotate the point around the origin `(0.0, 0.0)` by the angle in radians.
    pub fn rotate_along_origin(&mut self, angle: f64) {
        let rotated = geometry::rotate_along_origin(*self, angle);
        self.set_pos(rotated.x, rotated.y);
    }

    /// The distance to another point.
    pub fn distance_to(&self, other: impl crate::Coords) -> f64 {
        geometry::distance(*self, other)
    }

    /// The angle to another point, see [geometry::angle].
    pub fn angle_to(&self, other: impl crate::Coords) -> f64 {
        geometry::angle(*self, other)
    }

    /// The gradient towards another point. `None` when both share the same x coordinate.
    pub fn gradient(&self, other: impl crate::Coords) -> Option<f64> {
        geometry::gradient(*self, other)
    }

    /// Approximate equality, within an absolute tolerance of `1e-9` per coordinate.
    pub fn approx_eq(&self, other: &Self) -> bool {
        approx::abs_diff_eq!(self.x, other.x, epsilon = 1e-9)
            && approx::abs_diff_eq!(self.y, other.y, epsilon = 1e-9)
    }

    /// Convert to a nalgebra vector.
    pub fn to_vector(self) -> na::Vector2<f64> {
        na::vector![self.x, self.y]
    }

    /// Convert to a kurbo point.
    pub fn to_kurbo_point(self) -> crate::kurbo::Point {
        crate::kurbo::Point::new(self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Self) {
        self.move_by(rhs.x, rhs.y);
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Self) {
        self.move_by(-rhs.x, -rhs.y);
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Point {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<na::Vector2<f64>> for Point {
    fn from(vec: na::Vector2<f64>) -> Self {
        Self::new(vec[0], vec[1])
    }
}

impl From<na::Point2<f64>> for Point {
    fn from(point: na::Point2<f64>) -> Self {
        Self::new(point[0], point[1])
    }
}

impl From<Point> for na::Point2<f64> {
    fn from(point: Point) -> Self {
        na::point![point.x, point.y]
    }
}

impl From<crate::kurbo::Point> for Point {
    fn from(point: crate::kurbo::Point) -> Self {
        Self::new(point.x, point.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<x: {}, y: {}>", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(3.0, -4.0);

        assert_eq!(a + b, Point::new(4.0, -2.0));
        assert_eq!(a - b, Point::new(-2.0, 6.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(b / 2.0, Point::new(1.5, -2.0));

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn rotate_quarter_turn() {
        let mut p = Point::new(1.0, 0.0);
        p.rotate_along_origin(std::f64::consts::FRAC_PI_2);

        assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-12);
    }
}

// Imports
use super::distance;
use crate::ext::RectCoords;
use crate::shapes::{Circle, Ellipse, Polygon};
use crate::transform::Resizable;
use std::f64::consts::PI;

/// The perimeter of a rect.
pub fn rect(rect: &impl RectCoords) -> f64 {
    let (x, y, x2, y2) = rect.rect_coords();
    2.0 * (x2 - x).abs() + 2.0 * (y2 - y).abs()
}

/// The perimeter of a circle.
pub fn circle(circle: &Circle) -> f64 {
    circle.radius() * 2.0 * PI
}

/// The perimeter of an ellipse, using Ramanujan's approximation.
pub fn ellipse(ellipse: &Ellipse) -> f64 {
    let a = ellipse.width().abs() * 0.5;
    let b = ellipse.height().abs() * 0.5;
    PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
}

/// The perimeter of a polygon, including the closing edge.
pub fn polygon(polygon: &Polygon) -> f64 {
    polygon.edges().map(|(p1, p2)| distance(p1, p2)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlignMode, Point};
    use approx::assert_relative_eq;

    #[test]
    fn perimeters() {
        assert_relative_eq!(rect(&(0.0, 0.0, 4.0, 5.0)), 18.0);

        let c = Circle::new(0.0, 0.0, 1.5, AlignMode::Default, AlignMode::Default);
        assert_relative_eq!(circle(&c), 3.0 * PI);

        // A circle is an ellipse with equal axes.
        let e = Ellipse::new(0.0, 0.0, 3.0, 3.0, AlignMode::Default, AlignMode::Default);
        assert_relative_eq!(ellipse(&e), 3.0 * PI, epsilon = 1e-9);

        let triangle = Polygon::from_points(
            vec![Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(0.0, 3.0)],
            AlignMode::Default,
            AlignMode::Default,
        )
        .unwrap();
        assert_relative_eq!(polygon(&triangle), 12.0);
    }
}

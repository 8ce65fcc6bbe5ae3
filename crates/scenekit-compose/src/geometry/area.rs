// Imports
use super::{collision, intersect};
use crate::ext::{Coords, RectCoords};
use crate::shapes::{Circle, Ellipse, Polygon};
use crate::transform::Resizable;
use std::f64::consts::PI;

/// The area of a rect.
pub fn rect(rect: &impl RectCoords) -> f64 {
    let (x, y, x2, y2) = rect.rect_coords();
    ((x2 - x) * (y2 - y)).abs()
}

/// The area of a circle.
pub fn circle(circle: &Circle) -> f64 {
    circle.radius().powi(2) * PI
}

/// The area `π * width * height` of an ellipse, using its full extents.
pub fn ellipse(ellipse: &Ellipse) -> f64 {
    ellipse.width() * ellipse.height() * PI
}

/// The area of a triangle.
pub fn triangle(p1: impl Coords, p2: impl Coords, p3: impl Coords) -> f64 {
    let (x1, y1) = p1.xy();
    let (x2, y2) = p2.xy();
    let (x3, y3) = p3.xy();
    (x1 * (y2 - y3) - x2 * (y1 - y3) + x3 * (y1 - y2)).abs() * 0.5
}

/// The area of a polygon.
///
/// Simple polygons use the shoelace formula. Self-intersecting polygons fall back to counting the integer
/// grid points of the bounding box that lie inside the polygon, which is slow and only approximate.
pub fn polygon(polygon: &Polygon) -> f64 {
    if intersect::polygon_polygon(polygon, polygon) {
        tracing::warn!(
            "Polygon is self-intersecting, computing its area by sampling {}x{} grid points",
            polygon.width().abs().ceil(),
            polygon.height().abs().ceil()
        );
        return grid_area(polygon);
    }
    shoelace(polygon)
}

/// The shoelace formula over the edges. Only exact for polygons that do not intersect themselves, the
/// signed areas of crossing loops cancel out.
pub fn shoelace(polygon: &Polygon) -> f64 {
    let sum = polygon
        .edges()
        .map(|(p1, p2)| p1.x * p2.y - p1.y * p2.x)
        .sum::<f64>();
    sum.abs() * 0.5
}

fn grid_area(polygon: &Polygon) -> f64 {
    let (x, y, x2, y2) = polygon.rect_coords();
    let (x_start, x_end) = (x as i64, x2 as i64);
    let (y_start, y_end) = (y as i64, y2 as i64);

    (x_start..=x_end)
        .flat_map(|gx| (y_start..=y_end).map(move |gy| (gx as f64, gy as f64)))
        .filter(|&p| collision::polygon_point(polygon, p))
        .count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AlignMode, Point};
    use approx::assert_relative_eq;

    fn polygon_from(points: &[(f64, f64)]) -> Polygon {
        Polygon::from_points(
            points.iter().map(|&p| Point::from(p)).collect(),
            AlignMode::Default,
            AlignMode::Default,
        )
        .unwrap()
    }

    #[test]
    fn simple_shapes() {
        assert_relative_eq!(rect(&(0.0, 0.0, 4.0, 5.0)), 20.0);
        let c = Circle::new(0.0, 0.0, 2.0, AlignMode::Default, AlignMode::Default);
        assert_relative_eq!(circle(&c), 4.0 * PI);
        let e = Ellipse::new(0.0, 0.0, 2.0, 3.0, AlignMode::Default, AlignMode::Default);
        assert_relative_eq!(ellipse(&e), 6.0 * PI);
        assert_relative_eq!(triangle((0.0, 0.0), (4.0, 0.0), (0.0, 3.0)), 6.0);
    }

    #[test]
    fn square() {
        let square = polygon_from(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
        assert_relative_eq!(polygon(&square), 100.0);
    }

    #[test]
    fn winding_does_not_matter() {
        let ccw = polygon_from(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0)]);
        assert_relative_eq!(polygon(&ccw), 100.0);
    }

    #[test]
    fn self_intersecting_uses_the_grid() {
        let bowtie = polygon_from(&[(0.0, 0.0), (10.0, 10.0), (10.0, 0.0), (0.0, 10.0)]);

        // The strict interior grid points of both triangles, the crossing point excluded.
        assert_eq!(polygon(&bowtie), 41.0);
        assert_eq!(shoelace(&bowtie), 0.0);

        let wide = polygon_from(&[(0.0, 0.0), (20.0, 10.0), (20.0, 0.0), (0.0, 10.0)]);
        assert_eq!(polygon(&wide), 91.0);
    }

    #[test]
    fn simple_polygons_skip_the_grid() {
        let triangle = polygon_from(&[(0.0, 0.0), (3.0, 0.0), (0.0, 3.0)]);
        // One interior grid point, but the exact area.
        assert_relative_eq!(polygon(&triangle), 4.5);
        assert_relative_eq!(shoelace(&triangle), 4.5);
    }
}

// Imports
use super::{distance_squared, intersect};
use crate::ext::{Coords, RectCoords};
use crate::shapes::{Circle, Polygon};
use crate::transform::Resizable;
use std::f64::consts::PI;

/// Whether both points are equal.
pub fn point_point(p1: impl Coords, p2: impl Coords) -> bool {
    p1.xy() == p2.xy()
}

/// Whether the point lies strictly inside the rect. Points on the edges are outside.
pub fn rect_point(rect: &impl RectCoords, point: impl Coords) -> bool {
    let (x, y) = point.xy();
    let (rx, ry, rx2, ry2) = rect.rect_coords();
    rx < x && x < rx2 && ry < y && y < ry2
}

/// Whether the point lies strictly inside the circle.
pub fn circle_point(circle: &Circle, point: impl Coords) -> bool {
    let point = point.xy();
    if !rect_point(circle, point) {
        return false;
    }
    distance_squared(point, circle.middle_pos()) < circle.radius().powi(2)
}

/// Whether the point lies inside the polygon.
///
/// Points outside of the strict interior of the bounding box are rejected first. Then a ray is cast
/// towards positive x, counting the edge crossings. Each edge covers the half-open y-range
/// `[min_y, max_y)`, so a vertex shared by two edges is only counted once.
pub fn polygon_point(polygon: &Polygon, point: impl Coords) -> bool {
    let (px, py) = point.xy();
    if !rect_point(polygon, (px, py)) {
        return false;
    }
    let points = polygon.points();

    let crossings = points
        .iter()
        .zip(points.iter().cycle().skip(points.len() - 1))
        .filter(|(p2, p1)| {
            let (min_y, max_y) = (p1.y.min(p2.y), p1.y.max(p2.y));
            if !(min_y <= py && py < max_y) {
                return false;
            }
            let x = p1.x + (py - p1.y) * (p2.x - p1.x) / (p2.y - p1.y);
            x > px
        })
        .count();

    crossings % 2 == 1
}

/// Whether the interiors of both rects overlap.
pub fn rect_rect(r1: &impl RectCoords, r2: &impl RectCoords) -> bool {
    let (x1, y1, x1_2, y1_2) = r1.rect_coords();
    let (x2, y2, x2_2, y2_2) = r2.rect_coords();
    x1 < x2_2 && x1_2 > x2 && y1 < y2_2 && y1_2 > y2
}

/// Whether both circles overlap.
pub fn circle_circle(c1: &Circle, c2: &Circle) -> bool {
    distance_squared(c1.middle_pos(), c2.middle_pos()) < (c1.radius() + c2.radius()).powi(2)
}

/// Whether both polygons overlap.
///
/// True when the bounding boxes overlap and either an edge of one crosses an edge of the other
/// or a vertex of one lies inside the other.
pub fn polygon_polygon(pol1: &Polygon, pol2: &Polygon) -> bool {
    if !rect_rect(pol1, pol2) {
        return false;
    }
    intersect::polygon_polygon(pol1, pol2)
        || pol1.points().iter().any(|p| polygon_point(pol2, p))
        || pol2.points().iter().any(|p| polygon_point(pol1, p))
}

/// Whether the angle lies strictly between the two side angles, all in radians within `[-π, π]`.
///
/// When the sides have different signs and span more than π, the range wraps around ±π.
pub fn between_angles(side_1: f64, side_2: f64, angle: f64) -> bool {
    let upper = side_1.max(side_2);
    let lower = side_1.min(side_2);
    let same_sign = (side_1 >= 0.0 && side_2 >= 0.0) || (side_1 <= 0.0 && side_2 <= 0.0);

    if same_sign || upper - lower < PI {
        lower < angle && angle < upper
    } else {
        lower > angle || upper < angle
    }
}

/// Whether the shape lies strictly between the two x coordinates.
pub fn between_width<S>(shape: &S, x_1: f64, x_2: f64) -> bool
where
    S: Resizable + ?Sized,
{
    x_1 < shape.x() && shape.x() < x_2 - shape.width()
}

/// Whether the shape lies strictly between the two y coordinates.
pub fn between_height<S>(shape: &S, y_1: f64, y_2: f64) -> bool
where
    S: Resizable + ?Sized,
{
    y_1 < shape.y() && shape.y() < y_2 - shape.height()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Rect;
    use crate::{AlignMode, Point};

    fn square() -> Polygon {
        Polygon::from_points(
            vec![
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ],
            AlignMode::Default,
            AlignMode::Default,
        )
        .unwrap()
    }

    #[test]
    fn points() {
        assert!(point_point((1.0, 2.0), Point::new(1.0, 2.0)));
        assert!(!point_point((1.0, 2.0), (1.0, 2.5)));
    }

    #[test]
    fn rect_interior_is_strict() {
        let rect = (0.0, 0.0, 10.0, 10.0);
        assert!(rect_point(&rect, (5.0, 5.0)));
        assert!(!rect_point(&rect, (0.0, 5.0)));
        assert!(!rect_point(&rect, (10.0, 10.0)));
    }

    #[test]
    fn circles() {
        let c1 = Circle::new(0.0, 0.0, 10.0, AlignMode::Default, AlignMode::Default);
        assert!(circle_point(&c1, (10.0, 10.0)));
        assert!(circle_point(&c1, (10.0, 1.0)));
        // Inside the bounding box, outside of the disc.
        assert!(!circle_point(&c1, (1.0, 1.0)));

        let c2 = Circle::new(15.0, 0.0, 10.0, AlignMode::Default, AlignMode::Default);
        let c3 = Circle::new(40.0, 0.0, 10.0, AlignMode::Default, AlignMode::Default);
        assert!(circle_circle(&c1, &c2));
        assert!(!circle_circle(&c1, &c3));
    }

    #[test]
    fn square_polygon() {
        let square = square();
        assert!(polygon_point(&square, (5.0, 5.0)));
        assert!(!polygon_point(&square, (15.0, 5.0)));
        assert!(!polygon_point(&square, (0.0, 5.0)));
    }

    #[test]
    fn concave_polygon() {
        // An "L" shape: the notch at the upper right is outside.
        let l = Polygon::from_points(
            vec![
                Point::new(0.0, 0.0),
                Point::new(5.0, 0.0),
                Point::new(5.0, 5.0),
                Point::new(10.0, 5.0),
                Point::new(10.0, 10.0),
                Point::new(0.0, 10.0),
            ],
            AlignMode::Default,
            AlignMode::Default,
        )
        .unwrap();

        assert!(polygon_point(&l, (2.0, 2.0)));
        assert!(polygon_point(&l, (8.0, 8.0)));
        assert!(!polygon_point(&l, (8.0, 2.0)));
    }

    #[test]
    fn polygons() {
        let a = square();
        let mut b = square();
        b.move_by(5.0, 5.0);
        let mut c = square();
        c.move_by(20.0, 0.0);

        // Small square fully inside, no edges crossing.
        let mut inner = Polygon::from_points(
            vec![
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 2.0),
                Point::new(0.0, 2.0),
            ],
            AlignMode::Default,
            AlignMode::Default,
        )
        .unwrap();
        inner.move_by(4.0, 4.0);

        assert!(polygon_polygon(&a, &b));
        assert!(!polygon_polygon(&a, &c));
        assert!(polygon_polygon(&a, &inner));
        assert!(polygon_polygon(&inner, &a));
    }

    #[test]
    fn rects() {
        let r1 = Rect::new(0.0, 0.0, 10.0, 10.0, AlignMode::Default, AlignMode::Default);
        let r2 = Rect::new(5.0, 5.0, 10.0, 10.0, AlignMode::Default, AlignMode::Default);
        let r3 = Rect::new(10.0, 0.0, 10.0, 10.0, AlignMode::Default, AlignMode::Default);

        assert!(rect_rect(&r1, &r2));
        // Touching edges do not overlap.
        assert!(!rect_rect(&r1, &r3));
        assert!(between_width(&r2, 0.0, 20.0));
        assert!(!between_width(&r2, 0.0, 15.0));
        assert!(between_height(&r2, 0.0, 20.0));
    }

    #[test]
    fn angles() {
        assert!(between_angles(0.2, 1.0, 0.5));
        assert!(!between_angles(0.2, 1.0, 1.5));
        // Wrapping around ±π.
        assert!(between_angles(3.0, -3.0, PI));
        assert!(!between_angles(3.0, -3.0, 0.0));
        // Short span across zero.
        assert!(between_angles(-0.5, 0.5, 0.0));
    }
}

// Imports
use crate::ext::{Coords, RectCoords};
use crate::shapes::Polygon;

/// Tolerance keeping shared segment endpoints from counting as intersections.
const EPSILON: f64 = 1e-9;

fn strictly_between(value: f64, a: f64, b: f64) -> bool {
    a.min(b) + EPSILON < value && value < a.max(b) - EPSILON
}

/// Whether two line segments cross, each given as `(x, y) -> (x2, y2)`.
///
/// Touching endpoints and collinear overlaps do not count. Two vertical segments never intersect.
pub fn line_line(line_1: &impl RectCoords, line_2: &impl RectCoords) -> bool {
    let (x1, y1, x1_2, y1_2) = line_1.rect_coords();
    let (x2, y2, x2_2, y2_2) = line_2.rect_coords();
    let dx_1 = x1_2 - x1;
    let dx_2 = x2_2 - x2;

    match (dx_1 == 0.0, dx_2 == 0.0) {
        (true, true) => false,
        (true, false) => vertical_crossing((x1, y1, y1_2), (x2, y2, x2_2, y2_2)),
        (false, true) => vertical_crossing((x2, y2, y2_2), (x1, y1, x1_2, y1_2)),
        (false, false) => {
            let r1 = (y1_2 - y1) / dx_1;
            let r2 = (y2_2 - y2) / dx_2;
            let dr = r1 - r2;
            if dr == 0.0 {
                return false;
            }
            let b1 = y1 - r1 * x1;
            let b2 = y2 - r2 * x2;
            let x = (b2 - b1) / dr;

            strictly_between(x, x1, x1_2) && strictly_between(x, x2, x2_2)
        }
    }
}

/// The vertical segment `(x, y) -> (x, y2)` against the non-vertical segment `(x, y) -> (x2, y2)`.
fn vertical_crossing(
    (vx, vy, vy2): (f64, f64, f64),
    (x, y, x2, y2): (f64, f64, f64, f64),
) -> bool {
    if !strictly_between(vx, x, x2) {
        return false;
    }
    let r = (y2 - y) / (x2 - x);
    let y_at = y + r * (vx - x);

    strictly_between(y_at, vy, vy2)
}

/// Whether two line segments cross, each given by its two end points.
pub fn line_line2<P>(line_1: (P, P), line_2: (P, P)) -> bool
where
    P: Coords,
{
    let segment = |(start, end): (P, P)| {
        let (x, y) = start.xy();
        let (x2, y2) = end.xy();
        (x, y, x2, y2)
    };
    line_line(&segment(line_1), &segment(line_2))
}

/// Whether any edge of the first polygon crosses any edge of the second one.
///
/// The last point connects back to the first. Passing the same polygon twice tests for self-intersection.
pub fn polygon_polygon(pol_1: &Polygon, pol_2: &Polygon) -> bool {
    pol_1
        .edges()
        .any(|e1| pol_2.edges().any(|e2| line_line2(e1, e2)))
}

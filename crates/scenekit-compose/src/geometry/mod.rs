// Modules
/// Surface areas.
pub mod area;
/// Point and shape collision tests.
pub mod collision;
/// Line and polygon edge intersection tests.
pub mod intersect;
/// Perimeters.
pub mod perimeter;
/// Point list generators for common polygons.
pub mod points;
/// Volumes of solids.
pub mod volume;

// Imports
use crate::ext::Coords;
use crate::Point;
use std::f64::consts::TAU;

/// Errors of the geometry functions and the shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    /// A polygon needs at least one point.
    #[error("polygon needs at least one point")]
    EmptyPolygon,
    /// Index access outside of the point list.
    #[error("point index {index} out of range for polygon with {len} points")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of points.
        len: usize,
    },
    /// A direction was requested from two equal points.
    #[error("cannot derive a direction from a zero length vector")]
    DegenerateVector,
}

/// The euclidean distance between two points.
pub fn distance(p1: impl Coords, p2: impl Coords) -> f64 {
    distance_squared(p1, p2).sqrt()
}

/// The squared euclidean distance between two points.
pub fn distance_squared(p1: impl Coords, p2: impl Coords) -> f64 {
    let (x1, y1) = p1.xy();
    let (x2, y2) = p2.xy();
    (x1 - x2).powi(2) + (y1 - y2).powi(2)
}

/// The angle in radians of the vector from `p1` to `p2`, counter-clockwise on screen.
///
/// The y-axis points downwards, so the y difference is taken as `y1 - y2`. A horizontal vector pointing left
/// yields π, never -π.
pub fn angle(p1: impl Coords, p2: impl Coords) -> f64 {
    let (x1, y1) = p1.xy();
    let (x2, y2) = p2.xy();
    (y1 - y2).atan2(x2 - x1)
}

/// Rotate a point around the origin by the angle in radians.
pub fn rotate_along_origin(point: impl Coords, angle: f64) -> Point {
    let (x, y) = point.xy();
    let rotated = na::Rotation2::new(angle) * na::vector![x, y];
    Point::new(rotated[0], rotated[1])
}

/// The width and height of a line with the given angle in radians and length.
///
/// The angle is normalized into `[0, 2π)` and negated to match the downwards pointing y-axis.
pub fn get_dimensions(angle: f64, length: f64) -> (f64, f64) {
    let angle = -angle.rem_euclid(TAU);
    (angle.cos() * length, angle.sin() * length)
}

/// The width and height of a vector with the given length, pointing from `p1` to `p2`.
pub fn get_dimensions2(
    p1: impl Coords,
    p2: impl Coords,
    length: f64,
) -> Result<(f64, f64), GeometryError> {
    let (x1, y1) = p1.xy();
    let (x2, y2) = p2.xy();
    let dist = distance((x1, y1), (x2, y2));
    if dist == 0.0 {
        return Err(GeometryError::DegenerateVector);
    }
    Ok((length * (x2 - x1) / dist, length * (y2 - y1) / dist))
}

/// The gradient between two points. `None` for a vertical line.
pub fn gradient(p1: impl Coords, p2: impl Coords) -> Option<f64> {
    let (x1, y1) = p1.xy();
    let (x2, y2) = p2.xy();
    let dx = x2 - x1;
    if dx == 0.0 {
        None
    } else {
        Some((y2 - y1) / dx)
    }
}

/// The average of the points.
pub fn points_avg<I, P>(points: I) -> Result<Point, GeometryError>
where
    I: IntoIterator<Item = P>,
    P: Coords,
{
    let (sum, n) = points
        .into_iter()
        .fold((Point::ZERO, 0_usize), |(sum, n), p| (sum + p.to_point(), n + 1));
    if n == 0 {
        return Err(GeometryError::EmptyPolygon);
    }
    Ok(sum / n as f64)
}

/// All integer grid offsets of the rectangle spanned by the two points, relative to the first one.
///
/// The grid has `|x2 - x1|` columns and `|y2 - y1|` rows, truncated to integers.
pub fn rect_points(p1: impl Coords, p2: impl Coords) -> Vec<Point> {
    let (x1, y1) = p1.xy();
    let (x2, y2) = p2.xy();
    let width = (x2 - x1).abs() as usize;
    let height = (y2 - y1).abs() as usize;

    (0..width)
        .flat_map(|x| (0..height).map(move |y| Point::new(x as f64 + x1, y as f64 + y1)))
        .collect()
}

/// Integer points along the line from `p1` towards `p2`, one per unit of length.
pub fn line_points(p1: impl Coords, p2: impl Coords) -> Vec<Point> {
    let (x1, y1) = p1.xy();
    let (x2, y2) = p2.xy();
    let length = distance((x1, y1), (x2, y2));
    if length == 0.0 {
        return Vec::new();
    }
    let dx = (x2 - x1) / length;
    let dy = (y2 - y1) / length;

    (0..length as usize)
        .map(|i| {
            let i = i as f64;
            Point::new((x1 + dx * i).trunc(), (y1 + dy * i).trunc())
        })
        .collect()
}

/// The dot product of two vectors.
pub fn dot_product(v1: impl Coords, v2: impl Coords) -> f64 {
    let (x1, y1) = v1.xy();
    let (x2, y2) = v2.xy();
    x1 * x2 + y1 * y2
}

/// The eccentricity of an ellipse with the given full width and height.
pub fn ellipse_eccentricity(width: f64, height: f64) -> f64 {
    let a = width * 0.5;
    let b = height * 0.5;
    (1.0 - a.min(b).powi(2) / a.max(b).powi(2)).sqrt()
}

/// The reduced integer aspect ratio.
pub fn aspect_ratio(width: u64, height: u64) -> (u64, u64) {
    let divisor = gcd(width, height);
    if divisor == 0 {
        return (0, 0);
    }
    (width / divisor, height / divisor)
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

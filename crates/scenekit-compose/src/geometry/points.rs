// Imports
use super::get_dimensions;
use crate::Point;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// The direction the apex of an isosceles triangle points to.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    num_derive::FromPrimitive,
    num_derive::ToPrimitive,
)]
#[cfg_attr(feature = "clap-derive", derive(clap::ValueEnum))]
#[serde(rename = "triangle_orientation")]
pub enum TriangleOrientation {
    /// Apex at the top.
    #[serde(rename = "up")]
    #[default]
    Up = 0,
    /// Apex at the right.
    #[serde(rename = "right")]
    Right,
    /// Apex at the bottom.
    #[serde(rename = "down")]
    Down,
    /// Apex at the left.
    #[serde(rename = "left")]
    Left,
}

impl TryFrom<u32> for TriangleOrientation {
    type Error = anyhow::Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        num_traits::FromPrimitive::from_u32(value).with_context(|| {
            format!("TriangleOrientation try_from::<u32>() for value {value} failed")
        })
    }
}

fn collect<const N: usize>(points: [(f64, f64); N]) -> Vec<Point> {
    points.into_iter().map(Point::from).collect()
}

/// A rhombus spanning the given extents.
pub fn rhombus(width: f64, height: f64) -> Vec<Point> {
    collect([
        (width * 0.5, 0.0),
        (width, height * 0.5),
        (width * 0.5, height),
        (0.0, height * 0.5),
    ])
}

/// A plus sign spanning the given extents, with bars of the given thickness.
pub fn plus(width: f64, height: f64, x_thickness: f64, y_thickness: f64) -> Vec<Point> {
    let x1 = (width - x_thickness) * 0.5;
    let x2 = (width + x_thickness) * 0.5;
    let y1 = (height - y_thickness) * 0.5;
    let y2 = (height + y_thickness) * 0.5;

    collect([
        (x1, 0.0),
        (x2, 0.0),
        (x2, y1),
        (width, y1),
        (width, y2),
        (x2, y2),
        (x2, height),
        (x1, height),
        (x1, y2),
        (0.0, y2),
        (0.0, y1),
        (x1, y1),
    ])
}

/// A regular polygon with equal sides and angles around the origin.
pub fn regular_polygon(radius: f64, vertices: usize) -> Vec<Point> {
    let d_angle = TAU / vertices as f64;
    (0..vertices)
        .map(|i| Point::from(get_dimensions(i as f64 * d_angle, radius)))
        .collect()
}

/// An isosceles triangle spanning the given extents.
pub fn triangle(width: f64, height: f64, orientation: TriangleOrientation) -> Vec<Point> {
    match orientation {
        TriangleOrientation::Up => collect([(width * 0.5, 0.0), (width, height), (0.0, height)]),
        TriangleOrientation::Right => collect([(0.0, 0.0), (width, height * 0.5), (0.0, height)]),
        TriangleOrientation::Down => collect([(0.0, 0.0), (width, 0.0), (width * 0.5, height)]),
        TriangleOrientation::Left => collect([(width, 0.0), (width, height), (0.0, height * 0.5)]),
    }
}

/// A rectangle spanning the given extents.
pub fn rectangle(width: f64, height: f64) -> Vec<Point> {
    collect([(0.0, 0.0), (width, 0.0), (width, height), (0.0, height)])
}

/// A star around the origin with `outer_points` spikes, alternating between the inner and outer radius.
pub fn star(outer_radius: f64, inner_radius: f64, outer_points: usize) -> Vec<Point> {
    let vertices = 2 * outer_points;
    let d_angle = TAU / vertices as f64;

    (0..vertices)
        .map(|i| {
            let radius = if i % 2 == 0 {
                inner_radius
            } else {
                outer_radius
            };
            Point::from(get_dimensions((i as f64 - 0.5) * d_angle, radius))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::distance;
    use approx::assert_relative_eq;

    #[test]
    fn regular_polygon_vertices_lie_on_the_circle() {
        let hexagon = regular_polygon(5.0, 6);
        assert_eq!(hexagon.len(), 6);
        for p in &hexagon {
            assert_relative_eq!(distance(p, Point::ZERO), 5.0, epsilon = 1e-9);
        }
        assert_relative_eq!(hexagon[0].x, 5.0);
    }

    #[test]
    fn star_alternates_radii() {
        let star = star(10.0, 4.0, 5);
        assert_eq!(star.len(), 10);
        for (i, p) in star.iter().enumerate() {
            let expected = if i % 2 == 0 { 4.0 } else { 10.0 };
            assert_relative_eq!(distance(p, Point::ZERO), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn fixed_shapes() {
        assert_eq!(rectangle(2.0, 3.0)[2], Point::new(2.0, 3.0));
        assert_eq!(rhombus(4.0, 2.0)[1], Point::new(4.0, 1.0));
        assert_eq!(plus(9.0, 9.0, 3.0, 3.0).len(), 12);
        assert_eq!(
            triangle(4.0, 2.0, TriangleOrientation::Left)[2],
            Point::new(0.0, 1.0)
        );
        assert_eq!(
            TriangleOrientation::try_from(2).unwrap(),
            TriangleOrientation::Down
        );
    }
}

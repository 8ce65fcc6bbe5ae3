#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![allow(clippy::single_match)]

//! the scenekit-compose crate provides the building blocks for scenes: coordinates, shapes, alignment policies,
//! motion curves and the geometry, collision and intersection function libraries.

// Modules
/// colors
pub mod color;
/// module for extension traits for foreign types and the coordinate accessors
pub mod ext;
/// geometry kernel: distances, angles, collisions, intersections, areas, perimeters, volumes
pub mod geometry;
/// module for per-axis alignment policies
pub mod layout;
/// motion curves
pub mod motion;
/// points
pub mod point;
/// module for shapes
pub mod shapes;
/// module for the box transform and the resizable behaviour
pub mod transform;

// Re-exports
pub use color::Color;
pub use ext::{Coords, RectCoords};
pub use geometry::GeometryError;
pub use layout::{AlignMode, Alignment};
pub use motion::{MotionCurve, MotionError, MotionKind};
pub use point::Point;
pub use shapes::Shape;
pub use transform::{Resizable, Transform};

// Renames
extern crate nalgebra as na;
extern crate parry2d_f64 as p2d;

// the kurbo version piet renders with
pub use piet::kurbo;

// Imports
use std::f64::consts::PI;

/// The volume of a cuboid.
pub fn cuboid(width: f64, height: f64, length: f64) -> f64 {
    width * height * length
}

/// The volume of a pyramid with a rectangular base.
pub fn pyramid(width: f64, height: f64, length: f64) -> f64 {
    width * height * length / 3.0
}

/// The volume of a sphere.
pub fn sphere(radius: f64) -> f64 {
    radius.powi(3) * PI * 4.0 / 3.0
}

/// The volume of a cylinder.
pub fn cylinder(radius: f64, height: f64) -> f64 {
    radius.powi(2) * height * PI
}

/// The volume of a cone.
pub fn cone(radius: f64, height: f64) -> f64 {
    radius.powi(2) * height * PI / 3.0
}

// Imports
use crate::cli::Preset;
use anyhow::Context;
use scenekit_compose::geometry::{area, intersect, perimeter};
use scenekit_compose::shapes::Polygon;
use scenekit_compose::AlignMode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Measurement {
    pub(crate) points: usize,
    pub(crate) area: f64,
    pub(crate) perimeter: f64,
    pub(crate) self_intersecting: bool,
}

pub(crate) fn measure(polygon: &Polygon) -> Measurement {
    Measurement {
        points: polygon.len(),
        area: area::polygon(polygon),
        perimeter: perimeter::polygon(polygon),
        self_intersecting: intersect::polygon_polygon(polygon, polygon),
    }
}

pub(crate) fn run_measure(preset: Preset) -> anyhow::Result<()> {
    let polygon = Polygon::from_points(preset.points(), AlignMode::Default, AlignMode::Default)
        .with_context(|| format!("creating the polygon for preset {preset:?} failed"))?;
    let measurement = measure(&polygon);

    println!("points: {}", measurement.points);
    println!("area: {:.3}", measurement.area);
    println!("perimeter: {:.3}", measurement.perimeter);
    println!("self-intersecting: {}", measurement.self_intersecting);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn polygon(preset: Preset) -> Polygon {
        Polygon::from_points(preset.points(), AlignMode::Default, AlignMode::Default).unwrap()
    }

    #[test]
    fn rectangle() {
        let m = measure(&polygon(Preset::Rectangle {
            width: 10.0,
            height: 10.0,
        }));
        assert_eq!(m.points, 4);
        assert_relative_eq!(m.area, 100.0);
        assert_relative_eq!(m.perimeter, 40.0);
        assert!(!m.self_intersecting);
    }

    #[test]
    fn plus() {
        let m = measure(&polygon(Preset::Plus {
            width: 30.0,
            height: 30.0,
            x_thickness: 10.0,
            y_thickness: 10.0,
        }));
        assert_eq!(m.points, 12);
        assert_relative_eq!(m.area, 500.0, epsilon = 1e-9);
        assert!(!m.self_intersecting);
    }

    #[test]
    fn pentagram_intersects_itself() {
        let m = measure(&polygon(Preset::Pentagram { radius: 50.0 }));
        assert!(m.self_intersecting);
        assert!(m.area > 0.0);
    }

    #[test]
    fn empty_preset_fails() {
        assert!(run_measure(Preset::RegularPolygon {
            radius: 1.0,
            vertices: 0
        })
        .is_err());
    }
}

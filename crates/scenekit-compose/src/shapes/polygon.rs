// Imports
use super::{Rect, Shapeable};
use crate::ext::Coords;
use crate::geometry::{self, collision, GeometryError};
use crate::kurbo;
use crate::layout::Alignment;
use crate::transform::Resizable;
use crate::Point;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// A closed polygon.
///
/// The box always spans the points: `(x, y)` are the minimum coordinates, width and height the maximum spans.
/// For every point the position relative to the box is cached as ratio, resizing places the points by
/// these ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "PolygonDef", try_from = "PolygonDef")]
pub struct Polygon {
    rect: Rect,
    points: Vec<Point>,
    ratios: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "polygon")]
struct PolygonDef {
    #[serde(rename = "points")]
    points: Vec<Point>,
    #[serde(rename = "x_mode", default)]
    x_mode: Alignment,
    #[serde(rename = "y_mode", default)]
    y_mode: Alignment,
}

impl TryFrom<PolygonDef> for Polygon {
    type Error = GeometryError;

    fn try_from(def: PolygonDef) -> Result<Self, Self::Error> {
        Self::from_points(def.points, def.x_mode, def.y_mode)
    }
}

impl From<Polygon> for PolygonDef {
    fn from(polygon: Polygon) -> Self {
        Self {
            x_mode: polygon.x_mode(),
            y_mode: polygon.y_mode(),
            points: polygon.points,
        }
    }
}

impl Polygon {
    /// A new polygon. The points are translated so that the box starts at `(x, y)`.
    pub fn new(
        x: f64,
        y: f64,
        points: Vec<Point>,
        x_mode: impl Into<Alignment>,
        y_mode: impl Into<Alignment>,
    ) -> Result<Self, GeometryError> {
        let mut polygon = Self::from_points(points, x_mode, y_mode)?;
        polygon.set_pos(x, y);
        Ok(polygon)
    }

    /// A new polygon, keeping the absolute coordinates of the points.
    pub fn from_points(
        points: Vec<Point>,
        x_mode: impl Into<Alignment>,
        y_mode: impl Into<Alignment>,
    ) -> Result<Self, GeometryError> {
        if points.is_empty() {
            return Err(GeometryError::EmptyPolygon);
        }
        let mut polygon = Self {
            rect: Rect::new(0.0, 0.0, 0.0, 0.0, x_mode, y_mode),
            points,
            ratios: Vec::new(),
        };
        polygon.rebuild();
        Ok(polygon)
    }

    /// The points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The point at the index.
    pub fn point(&self, index: usize) -> Result<Point, GeometryError> {
        self.points
            .get(index)
            .copied()
            .ok_or(GeometryError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    /// The number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no points. Construction and `set_points` reject empty point lists.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The edges, the last point connecting back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.iter().copied().circular_tuple_windows()
    }

    /// Replace the points, keeping their absolute coordinates, and rebuild the box and the ratios.
    pub fn set_points(&mut self, points: Vec<Point>) -> Result<(), GeometryError> {
        if points.is_empty() {
            return Err(GeometryError::EmptyPolygon);
        }
        self.points = points;
        self.rebuild();
        Ok(())
    }

    /// Recompute the box from the points and the ratios from the box.
    pub fn rebuild(&mut self) {
        let (min_x, max_x) = self
            .points
            .iter()
            .map(|p| p.x)
            .minmax()
            .into_option()
            .unwrap_or_default();
        let (min_y, max_y) = self
            .points
            .iter()
            .map(|p| p.y)
            .minmax()
            .into_option()
            .unwrap_or_default();
        let (width, height) = (max_x - min_x, max_y - min_y);

        self.rect.place_x(min_x);
        self.rect.place_y(min_y);
        self.rect.place_width(width);
        self.rect.place_height(height);

        let ratio = |offset: f64, span: f64| if span == 0.0 { 0.0 } else { offset / span };
        self.ratios = self
            .points
            .iter()
            .map(|p| (ratio(p.x - min_x, width), ratio(p.y - min_y, height)))
            .collect();
    }

    /// The average of the points.
    pub fn points_avg(&self) -> Point {
        let sum = self.points.iter().fold(Point::ZERO, |sum, p| sum + *p);
        sum / self.points.len() as f64
    }

    /// Rotate every point around the point average by the angle in radians, then rebuild.
    pub fn rotate(&mut self, angle: f64) {
        let avg = self.points_avg();
        for point in self.points.iter_mut() {
            let (width, height) = geometry::get_dimensions(
                geometry::angle(avg, *point) + angle,
                geometry::distance(avg, *point),
            );
            point.set_pos(avg.x + width, avg.y + height);
        }
        self.rebuild();
    }
}

impl Resizable for Polygon {
    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn modes_mut(&mut self) -> (&mut Alignment, &mut Alignment) {
        self.rect.modes_mut()
    }

    fn set_x(&mut self, x: f64) {
        let dx = x - self.x();
        self.points.iter_mut().for_each(|p| p.move_x(dx));
        self.rect.place_x(x);
    }

    fn set_y(&mut self, y: f64) {
        let dy = y - self.y();
        self.points.iter_mut().for_each(|p| p.move_y(dy));
        self.rect.place_y(y);
    }

    fn set_width(&mut self, width: f64) {
        let x = self.x();
        for (point, (ratio_x, _)) in self.points.iter_mut().zip(self.ratios.iter()) {
            point.set_x(x + ratio_x * width);
        }
        let dx = self.rect.resize_width(width);
        self.move_x(dx);
    }

    fn set_height(&mut self, height: f64) {
        let y = self.y();
        for (point, (_, ratio_y)) in self.points.iter_mut().zip(self.ratios.iter()) {
            point.set_y(y + ratio_y * height);
        }
        let dy = self.rect.resize_height(height);
        self.move_y(dy);
    }
}

impl Shapeable for Polygon {
    fn outline_path(&self) -> kurbo::BezPath {
        let mut points = self.points.iter().map(|p| p.to_kurbo_point());
        let mut path = kurbo::BezPath::new();
        if let Some(first) = points.next() {
            path.move_to(first);
        }
        points.for_each(|p| path.line_to(p));
        path.close_path();
        path
    }

    fn collide_point(&self, point: impl Coords) -> bool {
        collision::polygon_point(self, point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AlignMode;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn triangle() -> Vec<Point> {
        vec![Point::new(10.0, 10.0), Point::new(30.0, 10.0), Point::new(20.0, 40.0)]
    }

    #[test]
    fn box_spans_the_points() {
        let polygon =
            Polygon::from_points(triangle(), AlignMode::Default, AlignMode::Default).unwrap();
        assert_relative_eq!(polygon.x(), 10.0);
        assert_relative_eq!(polygon.y(), 10.0);
        assert_relative_eq!(polygon.width(), 20.0);
        assert_relative_eq!(polygon.height(), 30.0);
    }

    #[test]
    fn new_translates_to_the_position() {
        let polygon =
            Polygon::new(0.0, 5.0, triangle(), AlignMode::Default, AlignMode::Default).unwrap();
        assert_eq!(polygon.point(0).unwrap(), Point::new(0.0, 5.0));
        assert_eq!(polygon.point(2).unwrap(), Point::new(10.0, 35.0));
        assert_relative_eq!(polygon.width(), 20.0);
    }

    #[test]
    fn errors() {
        assert_eq!(
            Polygon::from_points(Vec::new(), AlignMode::Default, AlignMode::Default),
            Err(GeometryError::EmptyPolygon)
        );
        let mut polygon =
            Polygon::from_points(triangle(), AlignMode::Default, AlignMode::Default).unwrap();
        assert_eq!(
            polygon.point(3),
            Err(GeometryError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(polygon.set_points(Vec::new()), Err(GeometryError::EmptyPolygon));
        assert_eq!(polygon.len(), 3);
    }

    #[test]
    fn set_points_round_trip() {
        let mut polygon =
            Polygon::from_points(triangle(), AlignMode::Default, AlignMode::Default).unwrap();
        let before = polygon.transform();
        polygon.set_points(triangle()).unwrap();

        assert_eq!(polygon.transform(), before);
    }

    #[test]
    fn aligned_box_follows_new_points() {
        let mut polygon =
            Polygon::from_points(triangle(), AlignMode::Right, AlignMode::Middle).unwrap();
        polygon
            .set_points(vec![Point::new(-5.0, 0.0), Point::new(5.0, 2.0), Point::new(0.0, 8.0)])
            .unwrap();

        assert_relative_eq!(polygon.x(), -5.0);
        assert_relative_eq!(polygon.y(), 0.0);
        assert_relative_eq!(polygon.width(), 10.0);
        assert_relative_eq!(polygon.height(), 8.0);
        assert!(!polygon.is_empty());
    }

    #[test]
    fn resizing_scales_by_ratio() {
        let mut polygon =
            Polygon::from_points(triangle(), AlignMode::Default, AlignMode::Default).unwrap();
        polygon.set_size(40.0, 60.0);

        assert_eq!(
            polygon.points(),
            &[Point::new(10.0, 10.0), Point::new(50.0, 10.0), Point::new(30.0, 70.0)]
        );
        assert_relative_eq!(polygon.x2(), 50.0);
        assert_relative_eq!(polygon.y2(), 70.0);
    }

    #[test]
    fn resizing_respects_alignment() {
        let mut polygon =
            Polygon::from_points(triangle(), AlignMode::Right, AlignMode::Middle).unwrap();
        polygon.set_size(40.0, 60.0);

        // Right edge and vertical center stay in place.
        assert_relative_eq!(polygon.x2(), 30.0);
        assert_relative_eq!(polygon.y() + polygon.height() * 0.5, 25.0);
        let min_x = polygon.points().iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = polygon.points().iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        assert_relative_eq!(min_x, polygon.x());
        assert_relative_eq!(min_y, polygon.y());
    }

    #[test]
    fn moving_moves_every_point() {
        let mut polygon =
            Polygon::from_points(triangle(), AlignMode::Default, AlignMode::Default).unwrap();
        polygon.move_by(5.0, -5.0);

        assert_eq!(polygon.point(0).unwrap(), Point::new(15.0, 5.0));
        assert_relative_eq!(polygon.x(), 15.0);
        assert_relative_eq!(polygon.y(), 5.0);
    }

    #[test]
    fn rotation_keeps_the_average_and_rebuilds() {
        let square = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let mut polygon =
            Polygon::from_points(square, AlignMode::Default, AlignMode::Default).unwrap();
        polygon.rotate(PI / 4.0);

        assert!(polygon.points_avg().approx_eq(&Point::new(5.0, 5.0)));
        let diagonal = 10.0 * 2.0_f64.sqrt();
        assert_relative_eq!(polygon.width(), diagonal, epsilon = 1e-9);
        assert_relative_eq!(polygon.height(), diagonal, epsilon = 1e-9);
        assert_relative_eq!(polygon.x(), 5.0 - diagonal * 0.5, epsilon = 1e-9);

        // The ratios follow the rotated points: resizing keeps every point inside the new box.
        polygon.set_width(10.0);
        for p in polygon.points() {
            assert!(p.x >= polygon.x() - 1e-9 && p.x <= polygon.x2() + 1e-9);
        }
    }

    #[test]
    fn serde_rebuilds() {
        let polygon =
            Polygon::from_points(triangle(), AlignMode::Fill, AlignMode::Default).unwrap();
        let json = serde_json::to_string(&polygon).unwrap();
        let back: Polygon = serde_json::from_str(&json).unwrap();

        assert_eq!(back, polygon);
        assert!(serde_json::from_str::<Polygon>(r#"{"points":[]}"#).is_err());
    }
}

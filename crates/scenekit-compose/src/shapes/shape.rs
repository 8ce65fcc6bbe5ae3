// Imports
use super::{Circle, Ellipse, Line, Polygon, ProgressBar, Rect, Shapeable};
use crate::ext::Coords;
use crate::kurbo;
use crate::layout::Alignment;
use crate::transform::Resizable;
use p2d::bounding_volume::Aabb;
use serde::{Deserialize, Serialize};

/// Shape, storing shape variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "shape")]
pub enum Shape {
    #[serde(rename = "rect")]
    /// A rect shape.
    Rect(Rect),
    #[serde(rename = "line")]
    /// A line shape.
    Line(Line),
    #[serde(rename = "circle")]
    /// A circle shape.
    Circle(Circle),
    #[serde(rename = "ellipse")]
    /// An ellipse shape.
    Ellipse(Ellipse),
    #[serde(rename = "polygon")]
    /// A polygon shape.
    Polygon(Polygon),
    #[serde(rename = "progress_bar")]
    /// A progress bar shape.
    ProgressBar(ProgressBar),
}

impl Default for Shape {
    fn default() -> Self {
        Self::Rect(Rect::default())
    }
}

impl Shape {
    /// The polygon, if this is one.
    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Self::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    /// The polygon, if this is one.
    pub fn as_polygon_mut(&mut self) -> Option<&mut Polygon> {
        match self {
            Self::Polygon(polygon) => Some(polygon),
            _ => None,
        }
    }

    /// The progress bar, if this is one.
    pub fn as_progress_bar_mut(&mut self) -> Option<&mut ProgressBar> {
        match self {
            Self::ProgressBar(bar) => Some(bar),
            _ => None,
        }
    }

    /// The name of the variant.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Rect(_) => "rect",
            Self::Line(_) => "line",
            Self::Circle(_) => "circle",
            Self::Ellipse(_) => "ellipse",
            Self::Polygon(_) => "polygon",
            Self::ProgressBar(_) => "progress_bar",
        }
    }
}

impl Resizable for Shape {
    fn rect(&self) -> &Rect {
        match self {
            Self::Rect(rect) => rect.rect(),
            Self::Line(line) => line.rect(),
            Self::Circle(circle) => circle.rect(),
            Self::Ellipse(ellipse) => ellipse.rect(),
            Self::Polygon(polygon) => polygon.rect(),
            Self::ProgressBar(bar) => bar.rect(),
        }
    }

    fn modes_mut(&mut self) -> (&mut Alignment, &mut Alignment) {
        match self {
            Self::Rect(rect) => rect.modes_mut(),
            Self::Line(line) => line.modes_mut(),
            Self::Circle(circle) => circle.modes_mut(),
            Self::Ellipse(ellipse) => ellipse.modes_mut(),
            Self::Polygon(polygon) => polygon.modes_mut(),
            Self::ProgressBar(bar) => bar.modes_mut(),
        }
    }

    fn set_x(&mut self, x: f64) {
        match self {
            Self::Rect(rect) => rect.set_x(x),
            Self::Line(line) => line.set_x(x),
            Self::Circle(circle) => circle.set_x(x),
            Self::Ellipse(ellipse) => ellipse.set_x(x),
            Self::Polygon(polygon) => polygon.set_x(x),
            Self::ProgressBar(bar) => bar.set_x(x),
        }
    }

    fn set_y(&mut self, y: f64) {
        match self {
            Self::Rect(rect) => rect.set_y(y),
            Self::Line(line) => line.set_y(y),
            Self::Circle(circle) => circle.set_y(y),
            Self::Ellipse(ellipse) => ellipse.set_y(y),
            Self::Polygon(polygon) => polygon.set_y(y),
            Self::ProgressBar(bar) => bar.set_y(y),
        }
    }

    fn set_width(&mut self, width: f64) {
        match self {
            Self::Rect(rect) => rect.set_width(width),
            Self::Line(line) => line.set_width(width),
            Self::Circle(circle) => circle.set_width(width),
            Self::Ellipse(ellipse) => ellipse.set_width(width),
            Self::Polygon(polygon) => polygon.set_width(width),
            Self::ProgressBar(bar) => bar.set_width(width),
        }
    }

    fn set_height(&mut self, height: f64) {
        match self {
            Self::Rect(rect) => rect.set_height(height),
            Self::Line(line) => line.set_height(height),
            Self::Circle(circle) => circle.set_height(height),
            Self::Ellipse(ellipse) => ellipse.set_height(height),
            Self::Polygon(polygon) => polygon.set_height(height),
            Self::ProgressBar(bar) => bar.set_height(height),
        }
    }

    // Circles override the size mutators, so these are dispatched as well.
    fn set_size(&mut self, width: f64, height: f64) {
        match self {
            Self::Circle(circle) => circle.set_size(width, height),
            _ => {
                self.set_width(width);
                self.set_height(height);
            }
        }
    }

    fn move_width(&mut self, d_width: f64) {
        match self {
            Self::Circle(circle) => circle.move_width(d_width),
            _ => self.set_width(self.width() + d_width),
        }
    }

    fn move_height(&mut self, d_height: f64) {
        match self {
            Self::Circle(circle) => circle.move_height(d_height),
            _ => self.set_height(self.height() + d_height),
        }
    }

    fn move_size(&mut self, d_width: f64, d_height: f64) {
        match self {
            Self::Circle(circle) => circle.move_size(d_width, d_height),
            _ => self.set_size(self.width() + d_width, self.height() + d_height),
        }
    }
}

impl Shapeable for Shape {
    fn bounds(&self) -> Aabb {
        match self {
            Self::Rect(rect) => rect.bounds(),
            Self::Line(line) => line.bounds(),
            Self::Circle(circle) => circle.bounds(),
            Self::Ellipse(ellipse) => ellipse.bounds(),
            Self::Polygon(polygon) => polygon.bounds(),
            Self::ProgressBar(bar) => bar.bounds(),
        }
    }

    fn outline_path(&self) -> kurbo::BezPath {
        match self {
            Self::Rect(rect) => rect.outline_path(),
            Self::Line(line) => line.outline_path(),
            Self::Circle(circle) => circle.outline_path(),
            Self::Ellipse(ellipse) => ellipse.outline_path(),
            Self::Polygon(polygon) => polygon.outline_path(),
            Self::ProgressBar(bar) => bar.outline_path(),
        }
    }

    fn collide_point(&self, point: impl Coords) -> bool {
        match self {
            Self::Rect(rect) => rect.collide_point(point),
            Self::Line(line) => line.collide_point(point),
            Self::Circle(circle) => circle.collide_point(point),
            Self::Ellipse(ellipse) => ellipse.collide_point(point),
            Self::Polygon(polygon) => polygon.collide_point(point),
            Self::ProgressBar(bar) => bar.collide_point(point),
        }
    }

    fn loop_behavior(&mut self) {
        match self {
            Self::Rect(rect) => rect.loop_behavior(),
            Self::Line(line) => line.loop_behavior(),
            Self::Circle(circle) => circle.loop_behavior(),
            Self::Ellipse(ellipse) => ellipse.loop_behavior(),
            Self::Polygon(polygon) => polygon.loop_behavior(),
            Self::ProgressBar(bar) => bar.loop_behavior(),
        }
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

impl From<Line> for Shape {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<Ellipse> for Shape {
    fn from(ellipse: Ellipse) -> Self {
        Self::Ellipse(ellipse)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Self::Polygon(polygon)
    }
}

impl From<ProgressBar> for Shape {
    fn from(bar: ProgressBar) -> Self {
        Self::ProgressBar(bar)
    }
}

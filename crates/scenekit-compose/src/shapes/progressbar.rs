// Imports
use super::{Rect, Shapeable};
use crate::ext::Coords;
use crate::geometry::collision;
use crate::kurbo;
use crate::layout::Alignment;
use crate::transform::Resizable;
use serde::{Deserialize, Serialize};

/// A bar filling `progress` of its full length, along the x-axis when horizontal, else along the y-axis.
///
/// The box always holds the filled part. Setting the progress resizes it through the axis alignment, so a
/// right aligned bar shrinks towards its right edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "ProgressBarDef", rename = "progress_bar")]
pub struct ProgressBar {
    #[serde(rename = "rect")]
    rect: Rect,
    #[serde(rename = "max_length")]
    max_length: f64,
    #[serde(rename = "progress")]
    progress: f64,
    #[serde(rename = "horizontal")]
    horizontal: bool,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, rename = "progress_bar")]
struct ProgressBarDef {
    #[serde(rename = "rect")]
    rect: Rect,
    #[serde(rename = "max_length")]
    max_length: f64,
    #[serde(rename = "progress")]
    progress: f64,
    #[serde(rename = "horizontal")]
    horizontal: bool,
}

impl Default for ProgressBarDef {
    fn default() -> Self {
        let bar = ProgressBar::default();
        Self {
            rect: bar.rect,
            max_length: bar.max_length,
            progress: bar.progress,
            horizontal: bar.horizontal,
        }
    }
}

impl From<ProgressBarDef> for ProgressBar {
    fn from(def: ProgressBarDef) -> Self {
        let mut bar = Self {
            rect: def.rect,
            max_length: def.max_length,
            progress: 0.0,
            horizontal: def.horizontal,
        };
        bar.set_progress(def.progress);
        bar
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self {
            rect: Rect::default(),
            max_length: 0.0,
            progress: 1.0,
            horizontal: true,
        }
    }
}

impl ProgressBar {
    /// A new, completely filled bar. The full length is the width when horizontal, else the height.
    pub fn new(
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        x_mode: impl Into<Alignment>,
        y_mode: impl Into<Alignment>,
        horizontal: bool,
    ) -> Self {
        Self {
            rect: Rect::new(x, y, width, height, x_mode, y_mode),
            max_length: if horizontal { width } else { height },
            progress: 1.0,
            horizontal,
        }
    }

    /// The filled fraction within `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Set the filled fraction, clamped to `[0, 1]`, and resize the bar.
    pub fn set_progress(&mut self, progress: f64) {
        // NaN falls back to an empty bar.
        self.progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.apply_progress();
    }

    /// The length of the completely filled bar.
    pub fn max_length(&self) -> f64 {
        self.max_length
    }

    /// Set the full length and resize the bar keeping its progress.
    pub fn set_max_length(&mut self, max_length: f64) {
        self.max_length = max_length;
        self.apply_progress();
    }

    /// Whether the bar fills along the x-axis.
    pub fn horizontal(&self) -> bool {
        self.horizontal
    }

    /// Whether there is anything to draw.
    pub fn is_visible(&self) -> bool {
        self.progress > 0.0
    }

    fn apply_progress(&mut self) {
        let length = self.max_length * self.progress;
        if self.horizontal {
            self.set_width(length);
        } else {
            self.set_height(length);
        }
    }
}

impl Resizable for ProgressBar {
    fn rect(&self) -> &Rect {
        &self.rect
    }

    fn modes_mut(&mut self) -> (&mut Alignment, &mut Alignment) {
        self.rect.modes_mut()
    }

    fn set_x(&mut self, x: f64) {
        self.rect.set_x(x);
    }

    fn set_y(&mut self, y: f64) {
        self.rect.set_y(y);
    }

    fn set_width(&mut self, width: f64) {
        self.rect.set_width(width);
    }

    fn set_height(&mut self, height: f64) {
        self.rect.set_height(height);
    }
}

impl Shapeable for ProgressBar {
    fn outline_path(&self) -> kurbo::BezPath {
        self.rect.outline_path()
    }

    fn collide_point(&self, point: impl Coords) -> bool {
        collision::rect_point(self, point)
    }
}

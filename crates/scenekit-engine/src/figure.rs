// Imports
use crate::clock::Clock;
use crate::{Drawable, EngineError, SceneConfig};
use scenekit_compose::layout::Alignment;
use scenekit_compose::shapes::{Circle, Rect, Shape, Shapeable};
use scenekit_compose::{Color, Resizable};
use serde::{Deserialize, Serialize};

/// The stroke width of lines drawn with a filled style.
pub const LINE_WIDTH: f64 = 1.0;

/// How the outline of a figure is painted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "fill_style")]
pub enum FillStyle {
    /// Fill the interior.
    #[serde(rename = "filled")]
    #[default]
    Filled,
    /// Stroke the outline.
    #[serde(rename = "outlined")]
    Outlined {
        #[serde(rename = "thickness")]
        thickness: f64,
    },
}

/// A shape with its paint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "figure")]
pub struct Figure {
    #[serde(rename = "shape")]
    pub shape: Shape,
    #[serde(rename = "color")]
    pub color: Color,
    #[serde(rename = "style")]
    pub style: FillStyle,
}

impl Figure {
    pub fn new(shape: Shape, color: Color, style: FillStyle) -> Self {
        Self {
            shape,
            color,
            style,
        }
    }

    pub fn filled(shape: Shape, color: Color) -> Self {
        Self::new(shape, color, FillStyle::Filled)
    }

    pub fn outlined(shape: Shape, color: Color, thickness: f64) -> Self {
        Self::new(shape, color, FillStyle::Outlined { thickness })
    }

    /// A filled rect with the configured default size and primary color.
    pub fn default_rect(
        x: f64,
        y: f64,
        x_mode: impl Into<Alignment>,
        y_mode: impl Into<Alignment>,
        config: &SceneConfig,
    ) -> Self {
        let rect = Rect::new(x, y, config.rect_width, config.rect_height, x_mode, y_mode);
        Self::filled(rect.into(), config.shape_color_1)
    }

    /// A filled circle with the configured default radius and secondary color.
    pub fn default_circle(
        x: f64,
        y: f64,
        x_mode: impl Into<Alignment>,
        y_mode: impl Into<Alignment>,
        config: &SceneConfig,
    ) -> Self {
        let circle = Circle::new(x, y, config.circle_radius, x_mode, y_mode);
        Self::filled(circle.into(), config.shape_color_2)
    }

    /// Whether drawing paints anything. Empty progress bars are skipped.
    pub fn is_visible(&self) -> bool {
        match &self.shape {
            Shape::ProgressBar(bar) => bar.is_visible(),
            _ => true,
        }
    }

    /// Fill the progress bar shape by the clock's progress.
    pub fn set_time_progress(&mut self, clock: &impl Clock) -> Result<(), EngineError> {
        let kind_name = self.shape.kind_name();
        let bar = self
            .shape
            .as_progress_bar_mut()
            .ok_or(EngineError::NotAProgressBar(kind_name))?;
        let progress = clock.progress().ok_or(EngineError::NoProgress)?;
        bar.set_progress(progress);
        Ok(())
    }
}

impl Drawable for Figure {
    fn draw(&self, cx: &mut impl piet::RenderContext) -> anyhow::Result<()> {
        if !self.is_visible() {
            return Ok(());
        }
        cx.save().map_err(|e| anyhow::anyhow!("{e:?}"))?;

        let path = self.shape.outline_path();
        let color = piet::Color::from(self.color);
        match (&self.shape, self.style) {
            // Lines have no interior.
            (Shape::Line(_), FillStyle::Filled) => cx.stroke(path, &color, LINE_WIDTH),
            (_, FillStyle::Filled) => cx.fill(path, &color),
            (_, FillStyle::Outlined { thickness }) => cx.stroke(path, &color, thickness),
        }

        cx.restore().map_err(|e| anyhow::anyhow!("{e:?}"))?;
        Ok(())
    }
}

impl Resizable for Figure {
    fn rect(&self) -> &Rect {
        self.shape.rect()
    }

    fn modes_mut(&mut self) -> (&mut Alignment, &mut Alignment) {
        self.shape.modes_mut()
    }

    fn set_x(&mut self, x: f64) {
        self.shape.set_x(x);
    }

    fn set_y(&mut self, y: f64) {
        self.shape.set_y(y);
    }

    fn set_width(&mut self, width: f64) {
        self.shape.set_width(width);
    }

    fn set_height(&mut self, height: f64) {
        self.shape.set_height(height);
    }

    fn set_size(&mut self, width: f64, height: f64) {
        self.shape.set_size(width, height);
    }

    fn move_width(&mut self, d_width: f64) {
        self.shape.move_width(d_width);
    }

    fn move_height(&mut self, d_height: f64) {
        self.shape.move_height(d_height);
    }

    fn move_size(&mut self, d_width: f64, d_height: f64) {
        self.shape.move_size(d_width, d_height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::{CountUp, Timer};
    use approx::assert_relative_eq;
    use scenekit_compose::shapes::ProgressBar;
    use scenekit_compose::AlignMode;

    #[test]
    fn defaults_from_config() {
        let config = SceneConfig::default();
        let rect = Figure::default_rect(0.0, 0.0, AlignMode::Default, AlignMode::Default, &config);
        assert_eq!(rect.width(), 120.0);
        assert_eq!(rect.height(), 50.0);
        assert_eq!(rect.color, Color::SHAPE_PRIMARY);

        let circle =
            Figure::default_circle(0.0, 0.0, AlignMode::Default, AlignMode::Default, &config);
        assert_eq!(circle.width(), 100.0);
        assert_eq!(circle.style, FillStyle::Filled);
    }

    #[test]
    fn delegates_circle_sizing() {
        let mut figure = Figure::outlined(
            Circle::new(0.0, 0.0, 10.0, AlignMode::Default, AlignMode::Default).into(),
            Color::BLUE,
            2.0,
        );
        figure.set_size(40.0, 30.0);
        assert_eq!(figure.width(), 30.0);
        assert_eq!(figure.height(), 30.0);
    }

    #[test]
    fn serde() {
        let figure = Figure::outlined(
            Rect::new(1.0, 2.0, 3.0, 4.0, AlignMode::Default, AlignMode::Default).into(),
            Color::GREEN,
            1.5,
        );
        let json = serde_json::to_string(&figure).unwrap();
        assert_eq!(serde_json::from_str::<Figure>(&json).unwrap(), figure);
    }

    #[test]
    fn progress_bar_follows_a_clock() {
        let bar =
            ProgressBar::new(0.0, 0.0, 200.0, 10.0, AlignMode::Default, AlignMode::Default, true);
        let mut figure = Figure::filled(bar.into(), Color::GREEN);
        let mut countup = CountUp::new(4, 1);

        figure.set_time_progress(&countup).unwrap();
        assert_relative_eq!(figure.width(), 0.0);
        assert!(!figure.is_visible());
        figure.draw(&mut piet::NullRenderContext::new()).unwrap();

        countup.start();
        countup.tick();
        countup.tick();
        figure.set_time_progress(&countup).unwrap();
        assert_relative_eq!(figure.width(), 100.0);
        assert_relative_eq!(figure.height(), 10.0);
        assert!(figure.is_visible());
    }

    #[test]
    fn time_progress_needs_a_bar_and_a_base() {
        let mut rect = Figure::filled(
            Rect::new(0.0, 0.0, 5.0, 5.0, AlignMode::Default, AlignMode::Default).into(),
            Color::RED,
        );
        assert_eq!(
            rect.set_time_progress(&CountUp::new(4, 1)),
            Err(EngineError::NotAProgressBar("rect"))
        );

        let bar =
            ProgressBar::new(0.0, 0.0, 20.0, 5.0, AlignMode::Default, AlignMode::Default, true);
        let mut figure = Figure::filled(bar.into(), Color::RED);
        assert_eq!(
            figure.set_time_progress(&Timer::new(3, 1)),
            Err(EngineError::NoProgress)
        );
        assert_relative_eq!(figure.width(), 20.0);
    }
}

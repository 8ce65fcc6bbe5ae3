// Imports
use super::{Effect, EffectKind};
use crate::store::{ShapeKey, ShapeStore};
use crate::EngineError;
use scenekit_compose::{Color, MotionCurve, MotionKind, Point, Resizable};

/// Configures effects. Defaults to a linear motion, a factor of 1 and a fixed end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectBuilder {
    ticks: u32,
    motion: MotionKind,
    factor: u32,
    fixed_end: bool,
}

impl EffectBuilder {
    pub fn new(ticks: u32) -> Self {
        Self {
            ticks,
            motion: MotionKind::Linear,
            factor: 1,
            fixed_end: true,
        }
    }

    pub fn motion(mut self, motion: MotionKind) -> Self {
        self.motion = motion;
        self
    }

    /// Ticks per second of the effect clock.
    pub fn factor(mut self, factor: u32) -> Self {
        self.factor = factor;
        self
    }

    /// Whether the figure is placed from its original state each tick and snaps to the result at the end.
    pub fn fixed_end(mut self, fixed_end: bool) -> Self {
        self.fixed_end = fixed_end;
        self
    }

    fn curve(&self, total_change: f64) -> Result<MotionCurve, EngineError> {
        Ok(MotionCurve::new(self.motion, total_change, self.ticks)?)
    }

    fn build(&self, target: ShapeKey, kind: EffectKind) -> Effect {
        let effect = Effect::new(target, kind, self.ticks, self.factor, self.fixed_end);
        tracing::debug!(
            "Created {} effect {:?} over {} ticks",
            effect.kind.name(),
            effect.id,
            self.ticks
        );
        effect
    }

    pub fn move_to(
        &self,
        store: &ShapeStore,
        target: ShapeKey,
        position: Point,
    ) -> Result<Effect, EngineError> {
        let figure = store.get(target).ok_or(EngineError::MissingShape(target))?;
        let original = Point::new(figure.x(), figure.y());
        let kind = EffectKind::Move {
            original,
            result: position,
            motion_x: self.curve(position.x - original.x)?,
            motion_y: self.curve(position.y - original.y)?,
        };
        Ok(self.build(target, kind))
    }

    /// A linear move by `(dx, dy)` every tick, ignoring the configured motion.
    pub fn move_linear_from_speed(
        &self,
        store: &ShapeStore,
        target: ShapeKey,
        dx: f64,
        dy: f64,
    ) -> Result<Effect, EngineError> {
        let figure = store.get(target).ok_or(EngineError::MissingShape(target))?;
        let ticks = f64::from(self.ticks);
        let destination = Point::new(figure.x() + dx * ticks, figure.y() + dy * ticks);
        self.motion(MotionKind::Linear)
            .move_to(store, target, destination)
    }

    pub fn resize(
        &self,
        store: &ShapeStore,
        target: ShapeKey,
        (width, height): (f64, f64),
    ) -> Result<Effect, EngineError> {
        let figure = store.get(target).ok_or(EngineError::MissingShape(target))?;
        let original = (figure.width(), figure.height());
        let kind = EffectKind::Resize {
            original,
            result: (width, height),
            motion_width: self.curve(width - original.0)?,
            motion_height: self.curve(height - original.1)?,
        };
        Ok(self.build(target, kind))
    }

    /// A linear resize by `(d_width, d_height)` every tick, ignoring the configured motion.
    pub fn resize_linear_from_speed(
        &self,
        store: &ShapeStore,
        target: ShapeKey,
        d_width: f64,
        d_height: f64,
    ) -> Result<Effect, EngineError> {
        let figure = store.get(target).ok_or(EngineError::MissingShape(target))?;
        let ticks = f64::from(self.ticks);
        let size = (
            figure.width() + d_width * ticks,
            figure.height() + d_height * ticks,
        );
        self.motion(MotionKind::Linear).resize(store, target, size)
    }

    /// Rotation around the point average. Only polygons can be rotated.
    pub fn rotate(
        &self,
        store: &ShapeStore,
        target: ShapeKey,
        radians: f64,
    ) -> Result<Effect, EngineError> {
        let figure = store.get(target).ok_or(EngineError::MissingShape(target))?;
        let polygon = figure
            .shape
            .as_polygon()
            .ok_or(EngineError::NotRotatable(figure.shape.kind_name()))?;
        let kind = EffectKind::Rotate {
            original: polygon.points().to_vec(),
            radians,
            motion: self.curve(radians)?,
        };
        Ok(self.build(target, kind))
    }

    /// A linear rotation by `rad_speed` every tick, ignoring the configured motion.
    pub fn rotate_linear_from_speed(
        &self,
        store: &ShapeStore,
        target: ShapeKey,
        rad_speed: f64,
    ) -> Result<Effect, EngineError> {
        self.motion(MotionKind::Linear)
            .rotate(store, target, rad_speed * f64::from(self.ticks))
    }

    pub fn color_transition(
        &self,
        store: &ShapeStore,
        target: ShapeKey,
        color: Color,
    ) -> Result<Effect, EngineError> {
        let figure = store.get(target).ok_or(EngineError::MissingShape(target))?;
        let original = figure.color;
        let kind = EffectKind::ColorTransition {
            original,
            result: color,
            motion_r: self.curve(f64::from(color.r) - f64::from(original.r))?,
            motion_g: self.curve(f64::from(color.g) - f64::from(original.g))?,
            motion_b: self.curve(f64::from(color.b) - f64::from(original.b))?,
        };
        Ok(self.build(target, kind))
    }
}

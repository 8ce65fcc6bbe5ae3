// Modules
mod builder;

// Re-exports
pub use builder::EffectBuilder;

// Imports
use crate::clock::{Clock, CountUp};
use crate::store::{ShapeKey, ShapeStore};
use crate::{EngineError, Figure};
use scenekit_compose::{Color, MotionCurve, MotionKind, Point, Resizable};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies an effect, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EffectId(u64);

impl EffectId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// What an effect animates, with the state it started from and the state it ends in.
#[derive(Debug, Clone, PartialEq)]
pub enum EffectKind {
    Move {
        original: Point,
        result: Point,
        motion_x: MotionCurve,
        motion_y: MotionCurve,
    },
    Resize {
        original: (f64, f64),
        result: (f64, f64),
        motion_width: MotionCurve,
        motion_height: MotionCurve,
    },
    /// Rotates the points of a polygon around their average.
    Rotate {
        original: Vec<Point>,
        radians: f64,
        motion: MotionCurve,
    },
    /// Transitions the red, green and blue channels. Alpha snaps to the result at a fixed end.
    ColorTransition {
        original: Color,
        result: Color,
        motion_r: MotionCurve,
        motion_g: MotionCurve,
        motion_b: MotionCurve,
    },
}

impl EffectKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Move { .. } => "move",
            Self::Resize { .. } => "resize",
            Self::Rotate { .. } => "rotate",
            Self::ColorTransition { .. } => "color_transition",
        }
    }

    /// Apply the state after tick `k`.
    fn apply(&self, figure: &mut Figure, k: f64, fixed_end: bool) -> Result<(), EngineError> {
        match self {
            Self::Move {
                original,
                motion_x,
                motion_y,
                ..
            } => {
                if fixed_end {
                    figure.set_pos(original.x + motion_x.s(k), original.y + motion_y.s(k));
                } else {
                    figure.move_by(motion_x.v(k), motion_y.v(k));
                }
            }
            Self::Resize {
                original,
                motion_width,
                motion_height,
                ..
            } => {
                if fixed_end {
                    figure.set_size(
                        original.0 + motion_width.s(k),
                        original.1 + motion_height.s(k),
                    );
                } else {
                    figure.move_size(motion_width.v(k), motion_height.v(k));
                }
            }
            Self::Rotate {
                original, motion, ..
            } => {
                let kind_name = figure.shape.kind_name();
                let polygon = figure
                    .shape
                    .as_polygon_mut()
                    .ok_or(EngineError::NotRotatable(kind_name))?;
                if fixed_end {
                    polygon.set_points(original.clone())?;
                    polygon.rotate(motion.s(k));
                } else {
                    polygon.rotate(motion.v(k));
                }
            }
            Self::ColorTransition {
                original,
                motion_r,
                motion_g,
                motion_b,
                ..
            } => {
                let [r, g, b] = if fixed_end {
                    original.rgb_f64()
                } else {
                    figure.color.rgb_f64()
                };
                let delta = |motion: &MotionCurve| {
                    if fixed_end {
                        motion.s(k)
                    } else {
                        motion.v(k)
                    }
                };
                figure
                    .color
                    .set_rgb_f64([r + delta(motion_r), g + delta(motion_g), b + delta(motion_b)]);
            }
        }
        Ok(())
    }

    /// Snap to the exact result.
    fn finish(&self, figure: &mut Figure) -> Result<(), EngineError> {
        match self {
            Self::Move { result, .. } => figure.set_pos(result.x, result.y),
            Self::Resize { result, .. } => figure.set_size(result.0, result.1),
            Self::Rotate {
                original, radians, ..
            } => {
                let kind_name = figure.shape.kind_name();
                let polygon = figure
                    .shape
                    .as_polygon_mut()
                    .ok_or(EngineError::NotRotatable(kind_name))?;
                polygon.set_points(original.clone())?;
                polygon.rotate(*radians);
            }
            Self::ColorTransition { result, .. } => figure.color = *result,
        }
        Ok(())
    }
}

/// An animation of one figure over a number of ticks.
///
/// Effects are created inactive and start once appended to a [crate::Timeline].
/// Each tick `k` (counting from 1) either places the figure at `original + s(k)` of the motion
/// curves (a fixed end), or applies the incremental change `v(k)`. On the last tick an effect with a fixed end
/// snaps its figure to the exact result, which removes the rounding drift of the curves.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect {
    id: EffectId,
    target: ShapeKey,
    kind: EffectKind,
    fixed_end: bool,
    clock: CountUp,
}

impl Effect {
    pub(crate) fn new(
        target: ShapeKey,
        kind: EffectKind,
        ticks: u32,
        factor: u32,
        fixed_end: bool,
    ) -> Self {
        Self {
            id: EffectId::next(),
            target,
            kind,
            fixed_end,
            clock: CountUp::new(i64::from(ticks), factor),
        }
    }

    /// Move the figure to the position over the ticks.
    pub fn move_to(
        store: &ShapeStore,
        target: ShapeKey,
        position: Point,
        ticks: u32,
        motion: MotionKind,
        factor: u32,
        fixed_end: bool,
    ) -> Result<Self, EngineError> {
        EffectBuilder::new(ticks)
            .motion(motion)
            .factor(factor)
            .fixed_end(fixed_end)
            .move_to(store, target, position)
    }

    /// Move the figure linearly by `(dx, dy)` every tick.
    pub fn move_linear_from_speed(
        store: &ShapeStore,
        target: ShapeKey,
        dx: f64,
        dy: f64,
        ticks: u32,
        factor: u32,
        fixed_end: bool,
    ) -> Result<Self, EngineError> {
        EffectBuilder::new(ticks)
            .factor(factor)
            .fixed_end(fixed_end)
            .move_linear_from_speed(store, target, dx, dy)
    }

    /// Resize the figure to `(width, height)` over the ticks.
    pub fn resize(
        store: &ShapeStore,
        target: ShapeKey,
        size: (f64, f64),
        ticks: u32,
        motion: MotionKind,
        factor: u32,
        fixed_end: bool,
    ) -> Result<Self, EngineError> {
        EffectBuilder::new(ticks)
            .motion(motion)
            .factor(factor)
            .fixed_end(fixed_end)
            .resize(store, target, size)
    }

    /// Resize the figure linearly by `(d_width, d_height)` every tick.
    pub fn resize_linear_from_speed(
        store: &ShapeStore,
        target: ShapeKey,
        d_width: f64,
        d_height: f64,
        ticks: u32,
        factor: u32,
        fixed_end: bool,
    ) -> Result<Self, EngineError> {
        EffectBuilder::new(ticks)
            .factor(factor)
            .fixed_end(fixed_end)
            .resize_linear_from_speed(store, target, d_width, d_height)
    }

    /// Rotate the polygon figure by the radians over the ticks.
    pub fn rotate(
        store: &ShapeStore,
        target: ShapeKey,
        radians: f64,
        ticks: u32,
        motion: MotionKind,
        factor: u32,
        fixed_end: bool,
    ) -> Result<Self, EngineError> {
        EffectBuilder::new(ticks)
            .motion(motion)
            .factor(factor)
            .fixed_end(fixed_end)
            .rotate(store, target, radians)
    }

    /// Rotate the polygon figure linearly by the radians every tick.
    pub fn rotate_linear_from_speed(
        store: &ShapeStore,
        target: ShapeKey,
        rad_speed: f64,
        ticks: u32,
        factor: u32,
        fixed_end: bool,
    ) -> Result<Self, EngineError> {
        EffectBuilder::new(ticks)
            .factor(factor)
            .fixed_end(fixed_end)
            .rotate_linear_from_speed(store, target, rad_speed)
    }

    /// Transition the figure color to the result over the ticks.
    pub fn color_transition(
        store: &ShapeStore,
        target: ShapeKey,
        color: Color,
        ticks: u32,
        motion: MotionKind,
        factor: u32,
        fixed_end: bool,
    ) -> Result<Self, EngineError> {
        EffectBuilder::new(ticks)
            .motion(motion)
            .factor(factor)
            .fixed_end(fixed_end)
            .color_transition(store, target, color)
    }

    pub fn id(&self) -> EffectId {
        self.id
    }

    /// The key of the animated figure.
    pub fn target(&self) -> ShapeKey {
        self.target
    }

    pub fn kind(&self) -> &EffectKind {
        &self.kind
    }

    pub fn fixed_end(&self) -> bool {
        self.fixed_end
    }

    /// The clock counting the ticks.
    pub fn clock(&self) -> &CountUp {
        &self.clock
    }

    pub fn is_active(&self) -> bool {
        self.clock.is_active()
    }

    /// Start the effect.
    pub fn start(&mut self) {
        self.clock.start();
    }

    /// Stop the effect. Stopped effects are removed from the timeline on its next update.
    pub fn stop(&mut self) {
        self.clock.stop();
    }

    /// Advance the effect by one tick, returning whether its figure was modified.
    ///
    /// When the target is no longer in the store, or can no longer be animated, the effect
    /// deactivates with a warning.
    pub fn tick(&mut self, store: &mut ShapeStore) -> bool {
        if !self.clock.is_active() {
            return false;
        }
        let Some(figure) = store.get_mut(self.target) else {
            tracing::warn!(
                "Stopping {} effect {:?}, Err: {}",
                self.kind.name(),
                self.id,
                EngineError::MissingShape(self.target)
            );
            self.clock.stop();
            return false;
        };

        let k = (self.clock.counter() + 1) as f64;
        let mut res = self.kind.apply(figure, k, self.fixed_end);
        if res.is_ok() && self.clock.tick().is_some() && self.fixed_end {
            res = self.kind.finish(figure);
        }
        if let Err(e) = res {
            tracing::warn!(
                "Stopping {} effect {:?}, Err: {e}",
                self.kind.name(),
                self.id
            );
            self.clock.stop();
        }
        true
    }
}

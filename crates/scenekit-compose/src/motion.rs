// Imports
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Errors when constructing a motion curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MotionError {
    /// A curve needs at least one tick to distribute its change over.
    #[error("motion curve duration must be at least one tick")]
    ZeroDuration,
}

/// The shape of a motion curve.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    num_derive::FromPrimitive,
    num_derive::ToPrimitive,
)]
#[cfg_attr(feature = "clap-derive", derive(clap::ValueEnum))]
#[serde(rename = "motion_kind")]
pub enum MotionKind {
    /// Constant speed.
    #[serde(rename = "linear")]
    #[default]
    Linear = 0,
    /// Smooth start and smooth end, cubic displacement.
    #[serde(rename = "parabola")]
    Parabola,
    /// Smooth start and smooth end, cosine displacement.
    #[serde(rename = "trig")]
    Trig,
    /// Exponentially accelerating.
    #[serde(rename = "exponential")]
    Exponential,
}

impl TryFrom<u32> for MotionKind {
    type Error = anyhow::Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        num_traits::FromPrimitive::from_u32(value)
            .with_context(|| format!("MotionKind try_from::<u32>() for value {value} failed"))
    }
}

/// A curve distributing a total change over a number of ticks.
///
/// `s(t)` is the displacement after `t` ticks, `v(t)` its derivative and `a(t)` the second derivative.
/// All of them are pure in `t`. `s(0) == 0` and (except for rounding) `s(ticks) == total_change`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionCurve {
    kind: MotionKind,
    total_change: f64,
    ticks: u32,
    c1: f64,
    c2: f64,
}

impl MotionCurve {
    /// A new curve. Fails for zero ticks.
    pub fn new(kind: MotionKind, total_change: f64, ticks: u32) -> Result<Self, MotionError> {
        if ticks == 0 {
            return Err(MotionError::ZeroDuration);
        }
        let t = f64::from(ticks);

        let (c1, c2) = match kind {
            MotionKind::Linear => (total_change / t, 0.0),
            MotionKind::Parabola => (
                -2.0 * total_change / t.powi(3),
                3.0 * total_change / t.powi(2),
            ),
            MotionKind::Trig => (PI / t, total_change * 0.5),
            MotionKind::Exponential => (
                (total_change.abs() + 1.0).powf(1.0 / t),
                if total_change >= 0.0 { 1.0 } else { -1.0 },
            ),
        };

        Ok(Self {
            kind,
            total_change,
            ticks,
            c1,
            c2,
        })
    }

    /// A linear curve.
    pub fn linear(total_change: f64, ticks: u32) -> Result<Self, MotionError> {
        Self::new(MotionKind::Linear, total_change, ticks)
    }

    /// The kind.
    pub fn kind(&self) -> MotionKind {
        self.kind
    }

    /// The total change.
    pub fn total_change(&self) -> f64 {
        self.total_change
    }

    /// The duration in ticks.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// The acceleration at tick `t`.
    pub fn a(&self, t: f64) -> f64 {
        match self.kind {
            MotionKind::Linear => {
                if t == 0.0 {
                    self.c1
                } else if t == f64::from(self.ticks) {
                    -self.c1
                } else {
                    0.0
                }
            }
            MotionKind::Parabola => 6.0 * self.c1 * t + 2.0 * self.c2,
            MotionKind::Trig => self.c2 * self.c1.powi(2) * (self.c1 * t).cos(),
            MotionKind::Exponential => self.c2 * self.c1.powf(t) * self.c1.ln().powi(2),
        }
    }

    /// The speed at tick `t`.
    pub fn v(&self, t: f64) -> f64 {
        match self.kind {
            MotionKind::Linear => self.c1,
            MotionKind::Parabola => 3.0 * self.c1 * t.powi(2) + 2.0 * self.c2 * t,
            MotionKind::Trig => self.c2 * self.c1 * (self.c1 * t).sin(),
            MotionKind::Exponential => self.c2 * self.c1.powf(t) * self.c1.ln(),
        }
    }

    /// The displacement after `t` ticks.
    pub fn s(&self, t: f64) -> f64 {
        match self.kind {
            MotionKind::Linear => self.c1 * t,
            MotionKind::Parabola => self.c1 * t.powi(3) + self.c2 * t.powi(2),
            MotionKind::Trig => self.c2 * (1.0 - (self.c1 * t).cos()),
            MotionKind::Exponential => self.c2 * (self.c1.powf(t) - 1.0),
        }
    }
}

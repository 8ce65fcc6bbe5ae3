// Imports
use crate::store::ShapeKey;
use scenekit_compose::{GeometryError, MotionError};

/// Errors of the scene engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// The shape store holds no figure for the key.
    #[error("no figure for key {0:?} in the shape store")]
    MissingShape(ShapeKey),
    /// Only polygons can be rotated.
    #[error("the figure shape is a {0}, only polygons can be rotated")]
    NotRotatable(&'static str),
    /// Only progress bars follow a clock.
    #[error("the figure shape is a {0}, only progress bars follow a clock")]
    NotAProgressBar(&'static str),
    /// The clock has no base to measure progress against.
    #[error("the clock reports no progress")]
    NoProgress,
    /// A figure index of a scene file is out of range.
    #[error("figure index {index} out of range for {len} figures")]
    UnknownFigure { index: usize, len: usize },
    #[error(transparent)]
    Motion(#[from] MotionError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

#![warn(missing_debug_implementations)]
#![allow(clippy::single_match)]

//! The scenekit-engine crate holds the stateful per-frame machinery: clocks, the figure store, effects,
//! the animation timeline and the scene frame loop.
//!
//! The main entry point is the [Scene] struct.

// Modules
pub mod clock;
pub mod config;
pub mod drawable;
pub mod effect;
pub mod error;
pub mod figure;
pub mod scene;
pub mod scenefile;
pub mod sceneflags;
pub mod store;
pub mod timeline;

// Re-exports
pub use config::SceneConfig;
pub use drawable::Drawable;
pub use effect::{Effect, EffectBuilder, EffectId, EffectKind};
pub use error::EngineError;
pub use figure::{FillStyle, Figure};
pub use scene::{Scene, SceneSnapshot};
pub use scenefile::SceneFile;
pub use sceneflags::SceneFlags;
pub use store::{ShapeKey, ShapeStore};
pub use timeline::Timeline;

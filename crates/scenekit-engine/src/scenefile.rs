// Imports
use crate::{EffectBuilder, EngineError, Figure, Scene, SceneConfig};
use anyhow::Context;
use scenekit_compose::{Color, MotionKind, Point};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The change an effect entry of a scene file animates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "effect_change")]
pub enum EffectChange {
    #[serde(rename = "move_to")]
    MoveTo {
        #[serde(rename = "x")]
        x: f64,
        #[serde(rename = "y")]
        y: f64,
    },
    /// Linear move by `(dx, dy)` every tick.
    #[serde(rename = "move_by_speed")]
    MoveBySpeed {
        #[serde(rename = "dx")]
        dx: f64,
        #[serde(rename = "dy")]
        dy: f64,
    },
    #[serde(rename = "resize")]
    Resize {
        #[serde(rename = "width")]
        width: f64,
        #[serde(rename = "height")]
        height: f64,
    },
    /// Linear resize by `(d_width, d_height)` every tick.
    #[serde(rename = "resize_by_speed")]
    ResizeBySpeed {
        #[serde(rename = "d_width")]
        d_width: f64,
        #[serde(rename = "d_height")]
        d_height: f64,
    },
    #[serde(rename = "rotate")]
    Rotate {
        #[serde(rename = "radians")]
        radians: f64,
    },
    #[serde(rename = "color_transition")]
    ColorTransition {
        #[serde(rename = "color")]
        color: Color,
    },
}

/// An effect of a scene file, targeting a figure by its index in the figure list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "effect_entry")]
pub struct EffectEntry {
    #[serde(rename = "figure")]
    pub figure: usize,
    #[serde(rename = "ticks")]
    pub ticks: u32,
    #[serde(rename = "change")]
    pub change: EffectChange,
    #[serde(rename = "motion", default)]
    pub motion: MotionKind,
    #[serde(rename = "factor", default = "default_factor")]
    pub factor: u32,
    #[serde(rename = "fixed_end", default = "default_fixed_end")]
    pub fixed_end: bool,
}

fn default_factor() -> u32 {
    1
}

fn default_fixed_end() -> bool {
    true
}

/// A scene description: the configuration, the figures and the effects started on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "scene_file")]
pub struct SceneFile {
    #[serde(rename = "config")]
    pub config: SceneConfig,
    #[serde(rename = "figures")]
    pub figures: Vec<Figure>,
    #[serde(rename = "effects")]
    pub effects: Vec<EffectEntry>,
}

impl SceneFile {
    /// Parse a scene file from JSON.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("parsing the scene file failed")
    }

    /// Load a scene file from a JSON file.
    pub fn load_from_path(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading scene file `{}` failed", path.display()))?;
        Self::from_json(&json)
            .with_context(|| format!("loading scene file `{}` failed", path.display()))
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("serializing the scene file failed")
    }

    /// Build the scene, inserting the figures and starting the effects in file order.
    pub fn into_scene(self) -> Result<Scene, EngineError> {
        let mut scene = Scene::new(self.config);
        let keys: Vec<_> = self
            .figures
            .into_iter()
            .map(|figure| scene.add_figure(figure))
            .collect();

        for entry in self.effects {
            let key = *keys.get(entry.figure).ok_or(EngineError::UnknownFigure {
                index: entry.figure,
                len: keys.len(),
            })?;
            let builder = EffectBuilder::new(entry.ticks)
                .motion(entry.motion)
                .factor(entry.factor)
                .fixed_end(entry.fixed_end);
            let store = &scene.store;
            let effect = match entry.change {
                EffectChange::MoveTo { x, y } => builder.move_to(store, key, Point::new(x, y)),
                EffectChange::MoveBySpeed { dx, dy } => {
                    builder.move_linear_from_speed(store, key, dx, dy)
                }
                EffectChange::Resize { width, height } => {
                    builder.resize(store, key, (width, height))
                }
                EffectChange::ResizeBySpeed { d_width, d_height } => {
                    builder.resize_linear_from_speed(store, key, d_width, d_height)
                }
                EffectChange::Rotate { radians } => builder.rotate(store, key, radians),
                EffectChange::ColorTransition { color } => {
                    builder.color_transition(store, key, color)
                }
            }?;
            scene.animate(effect);
        }

        Ok(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenekit_compose::Resizable;

    const SCENE: &str = r#"{
        "config": { "ticks_per_second": 30 },
        "figures": [
            {
                "shape": { "rect": { "transform": { "x": 0.0, "y": 0.0, "width": 10.0, "height": 10.0 } } },
                "color": { "r": 255, "g": 0, "b": 0, "a": 255 }
            }
        ],
        "effects": [
            { "figure": 0, "ticks": 10, "change": { "move_to": { "x": 100.0, "y": 0.0 } } },
            { "figure": 0, "ticks": 5, "change": { "resize": { "width": 20.0, "height": 5.0 } }, "motion": "trig" }
        ]
    }"#;

    #[test]
    fn entry_defaults() {
        let file = SceneFile::from_json(SCENE).unwrap();
        assert_eq!(file.config.ticks_per_second, 30);
        assert_eq!(file.config.rect_width, 120.0);
        assert_eq!(file.effects[0].motion, MotionKind::Linear);
        assert_eq!(file.effects[0].factor, 1);
        assert!(file.effects[0].fixed_end);
        assert_eq!(file.effects[1].motion, MotionKind::Trig);
    }

    #[test]
    fn runs_to_the_results() {
        let mut scene = SceneFile::from_json(SCENE).unwrap().into_scene().unwrap();
        assert_eq!(scene.timeline.len(), 2);
        let _ = scene.run(10);

        let snapshot = scene.snapshot();
        assert_eq!(snapshot.running_effects, 0);
        let figure = &snapshot.figures[0];
        assert_eq!((figure.x(), figure.y()), (100.0, 0.0));
        assert_eq!((figure.width(), figure.height()), (20.0, 5.0));
    }

    #[test]
    fn unknown_figure() {
        let mut file = SceneFile::from_json(SCENE).unwrap();
        file.effects[0].figure = 3;
        assert_eq!(
            file.into_scene().unwrap_err(),
            EngineError::UnknownFigure { index: 3, len: 1 }
        );
    }

    #[test]
    fn invalid_json_has_context() {
        let err = SceneFile::from_json("{ \"figures\": 3 }").unwrap_err();
        assert!(format!("{err:#}").starts_with("parsing the scene file failed"));
    }
}

// Imports
use crate::store::{ShapeKey, ShapeStore};
use crate::{Drawable, Effect, Figure, SceneConfig, SceneFlags, Timeline};
use scenekit_compose::Coords;
use serde::{Deserialize, Serialize};

/// A scene: figures, the effects animating them and the frame counter.
///
/// Every frame runs the per-frame behaviour of all figures, then ticks the timeline.
/// Drawing happens separately, in insertion order of the figures.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub config: SceneConfig,
    pub store: ShapeStore,
    pub timeline: Timeline,
    frame: u64,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config: config.sanitized(),
            ..Default::default()
        }
    }

    /// The number of updates run so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Add a figure, returning its key.
    pub fn add_figure(&mut self, figure: Figure) -> ShapeKey {
        self.store.insert(figure)
    }

    /// Start the effect.
    pub fn animate(&mut self, effect: Effect) {
        self.timeline.append(effect);
    }

    /// Run one frame.
    pub fn update(&mut self) -> SceneFlags {
        self.store.loop_behaviors();
        let flags = self.timeline.update(&mut self.store);
        self.frame += 1;
        flags
    }

    /// Run `frames` frames, merging their flags.
    pub fn run(&mut self, frames: u64) -> SceneFlags {
        let mut flags = SceneFlags::default();
        for _ in 0..frames {
            flags.merge(self.update());
        }
        flags
    }

    /// The keys of the figures whose shape contains the point, in insertion order.
    pub fn figures_at(&self, point: impl Coords) -> Vec<ShapeKey> {
        self.store.keys_at(point)
    }

    /// The current state.
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            frame: self.frame,
            figures: self.store.iter().map(|(_, figure)| figure.clone()).collect(),
            running_effects: self.timeline.len(),
        }
    }
}

impl Drawable for Scene {
    /// Clear with the background color, then draw the figures.
    fn draw(&self, cx: &mut impl piet::RenderContext) -> anyhow::Result<()> {
        cx.clear(None, piet::Color::from(self.config.background_color));
        for (_, figure) in self.store.iter() {
            figure.draw(cx)?;
        }
        Ok(())
    }
}

/// The state of a scene at a frame.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename = "scene_snapshot")]
pub struct SceneSnapshot {
    #[serde(rename = "frame")]
    pub frame: u64,
    /// The figures in insertion order.
    #[serde(rename = "figures")]
    pub figures: Vec<Figure>,
    #[serde(rename = "running_effects")]
    pub running_effects: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EffectBuilder;
    use scenekit_compose::shapes::{Circle, Rect};
    use scenekit_compose::{AlignMode, Color, Point, Resizable};

    #[test]
    fn frames_and_snapshots() {
        let mut scene = Scene::new(SceneConfig::default());
        let key = scene.add_figure(Figure::filled(
            Rect::new(0.0, 0.0, 10.0, 10.0, AlignMode::Default, AlignMode::Default).into(),
            Color::RED,
        ));
        let effect = EffectBuilder::new(4)
            .move_to(&scene.store, key, Point::new(40.0, 0.0))
            .unwrap();
        scene.animate(effect);

        let flags = scene.run(2);
        assert!(flags.redraw);
        assert_eq!(scene.frame(), 2);
        assert_eq!(scene.snapshot().running_effects, 1);
        assert_eq!(scene.store.get(key).unwrap().x(), 20.0);

        let flags = scene.run(3);
        assert!(flags.timeline_modified);
        let snapshot = scene.snapshot();
        assert_eq!(snapshot.frame, 5);
        assert_eq!(snapshot.running_effects, 0);
        assert_eq!(snapshot.figures[0].x(), 40.0);
    }

    #[test]
    fn hit_testing() {
        let mut scene = Scene::default();
        let rect = scene.add_figure(Figure::filled(
            Rect::new(0.0, 0.0, 10.0, 10.0, AlignMode::Default, AlignMode::Default).into(),
            Color::RED,
        ));
        let circle = scene.add_figure(Figure::outlined(
            Circle::new(0.0, 0.0, 10.0, AlignMode::Default, AlignMode::Default).into(),
            Color::BLUE,
            1.0,
        ));

        assert_eq!(scene.figures_at((9.0, 9.0)), vec![rect, circle]);
        // Inside the rect, outside of the disc.
        assert_eq!(scene.figures_at((1.0, 1.0)), vec![rect]);
        assert_eq!(scene.figures_at((15.0, 15.0)), vec![circle]);
    }

    #[test]
    fn invalid_config_is_sanitized() {
        let scene = Scene::new(SceneConfig {
            ticks_per_second: 0,
            ..Default::default()
        });
        assert_eq!(scene.config.ticks_per_second, 60);
    }
}

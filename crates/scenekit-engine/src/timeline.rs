// Imports
use crate::effect::{Effect, EffectId};
use crate::store::ShapeStore;
use crate::SceneFlags;

/// The running effects, ticked in insertion order once per frame.
///
/// Effects are started when they enter the timeline. After every effect ticked, the inactive ones are removed,
/// keeping the order of the survivors. `update` borrows the timeline mutably, so effects cannot append
/// to it while it runs.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    effects: Vec<Effect>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the effect and append it.
    pub fn append(&mut self, mut effect: Effect) {
        effect.start();
        self.effects.push(effect);
    }

    /// Start the effect and insert it at the index, appending when the index is past the end.
    pub fn insert(&mut self, index: usize, mut effect: Effect) {
        effect.start();
        let index = index.min(self.effects.len());
        self.effects.insert(index, effect);
    }

    /// Start and append every effect.
    pub fn extend(&mut self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            self.append(effect);
        }
    }

    /// Tick every effect, then remove the inactive ones.
    pub fn update(&mut self, store: &mut ShapeStore) -> SceneFlags {
        let mut flags = SceneFlags::default();

        for effect in self.effects.iter_mut() {
            if effect.tick(store) {
                flags.redraw = true;
                flags.store_modified = true;
            }
        }

        let len = self.effects.len();
        self.effects.retain(|effect| effect.is_active());
        if self.effects.len() != len {
            tracing::debug!("Removed {} finished effects", len - self.effects.len());
            flags.timeline_modified = true;
        }

        flags
    }

    /// Remove every effect.
    pub fn clear(&mut self) {
        self.effects.clear();
    }

    /// How often the effect is in the timeline.
    pub fn count(&self, id: EffectId) -> usize {
        self.effects.iter().filter(|e| e.id() == id).count()
    }

    /// The index of the effect.
    pub fn index(&self, id: EffectId) -> Option<usize> {
        self.effects.iter().position(|e| e.id() == id)
    }

    /// Remove the effect at the index.
    pub fn pop(&mut self, index: usize) -> Option<Effect> {
        (index < self.effects.len()).then(|| self.effects.remove(index))
    }

    /// Remove the effect.
    pub fn remove(&mut self, id: EffectId) -> Option<Effect> {
        let index = self.index(id)?;
        Some(self.effects.remove(index))
    }

    pub fn reverse(&mut self) {
        self.effects.reverse();
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Effect> {
        self.effects.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Effect> {
        self.effects.iter()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Effect;
    type IntoIter = std::slice::Iter<'a, Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.iter()
    }
}

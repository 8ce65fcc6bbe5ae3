// Imports
use crate::Figure;
use scenekit_compose::shapes::Shapeable;
use scenekit_compose::Coords;
use slotmap::HopSlotMap;

slotmap::new_key_type! {
    pub struct ShapeKey;
}

/// Holds the figures of a scene.
///
/// Figures are addressed by their [ShapeKey], which effects hold as non-owning references to their target.
/// A key stays valid until its figure is removed, lookups with stale keys return `None`.
/// Iteration follows insertion order, which is also the drawing order.
#[derive(Debug, Clone, Default)]
pub struct ShapeStore {
    figures: HopSlotMap<ShapeKey, Figure>,
    order: Vec<ShapeKey>,
}

impl ShapeStore {
    /// Insert a figure, returning its key.
    pub fn insert(&mut self, figure: Figure) -> ShapeKey {
        let key = self.figures.insert(figure);
        self.order.push(key);
        tracing::debug!("Inserted figure with key {key:?}");
        key
    }

    /// Remove a figure.
    pub fn remove(&mut self, key: ShapeKey) -> Option<Figure> {
        let figure = self.figures.remove(key)?;
        self.order.retain(|k| *k != key);
        tracing::debug!("Removed figure with key {key:?}");
        Some(figure)
    }

    /// Remove all figures.
    pub fn clear(&mut self) {
        self.figures.clear();
        self.order.clear();
    }

    pub fn get(&self, key: ShapeKey) -> Option<&Figure> {
        self.figures.get(key)
    }

    pub fn get_mut(&mut self, key: ShapeKey) -> Option<&mut Figure> {
        self.figures.get_mut(key)
    }

    pub fn contains(&self, key: ShapeKey) -> bool {
        self.figures.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.figures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// The keys in insertion order.
    pub fn keys(&self) -> &[ShapeKey] {
        &self.order
    }

    /// The figures with their keys in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ShapeKey, &Figure)> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.figures.get(*key).map(|figure| (*key, figure)))
    }

    /// Mutable access to all figures, in no particular order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ShapeKey, &mut Figure)> + '_ {
        self.figures.iter_mut()
    }

    /// Run the per-frame behaviour of every figure.
    pub fn loop_behaviors(&mut self) {
        self.figures
            .values_mut()
            .for_each(|figure| figure.shape.loop_behavior());
    }

    /// The keys of the figures whose shape contains the point, in insertion order.
    pub fn keys_at(&self, point: impl Coords) -> Vec<ShapeKey> {
        let point = point.xy();
        self.iter()
            .filter(|(_, figure)| figure.shape.collide_point(point))
            .map(|(key, _)| key)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scenekit_compose::shapes::Rect;
    use scenekit_compose::{AlignMode, Color};

    fn figure(x: f64) -> Figure {
        Figure::filled(
            Rect::new(x, 0.0, 10.0, 10.0, AlignMode::Default, AlignMode::Default).into(),
            Color::RED,
        )
    }

    #[test]
    fn insertion_order_survives_removal() {
        let mut store = ShapeStore::default();
        let a = store.insert(figure(0.0));
        let b = store.insert(figure(20.0));
        let c = store.insert(figure(40.0));

        assert!(store.remove(b).is_some());
        let d = store.insert(figure(60.0));
        assert_eq!(store.keys(), &[a, c, d]);
        assert_eq!(store.len(), 3);

        // Stale keys stay stale, even when the slot is reused.
        assert!(!store.contains(b));
        assert!(store.get(b).is_none());
        assert!(store.remove(b).is_none());
    }

    #[test]
    fn keys_at_point() {
        let mut store = ShapeStore::default();
        let a = store.insert(figure(0.0));
        let b = store.insert(figure(5.0));

        assert_eq!(store.keys_at((7.0, 5.0)), vec![a, b]);
        assert_eq!(store.keys_at((12.0, 5.0)), vec![b]);
        assert!(store.keys_at((50.0, 5.0)).is_empty());
    }
}

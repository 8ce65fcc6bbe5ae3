/// Flags returned to the caller driving the scene after an update.
#[must_use]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SceneFlags {
    /// Needs redrawing.
    pub redraw: bool,
    /// Whether figures in the store were modified.
    pub store_modified: bool,
    /// Whether effects finished and were removed from the timeline.
    pub timeline_modified: bool,
}

impl SceneFlags {
    /// Merge with another SceneFlags struct.
    pub fn merge(&mut self, other: Self) {
        self.redraw |= other.redraw;
        self.store_modified |= other.store_modified;
        self.timeline_modified |= other.timeline_modified;
    }
}

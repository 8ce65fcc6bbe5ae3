// Imports
use super::{Clock, Time};
use crate::SceneConfig;

/// A time that counts up while active. It never fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timer {
    time: Time,
    active: bool,
}

impl Timer {
    /// A new inactive timer.
    pub fn new(counter: i64, factor: u32) -> Self {
        Self {
            time: Time::new(counter, factor),
            active: false,
        }
    }

    /// A new inactive timer holding the given seconds.
    pub fn in_seconds(seconds: f64, factor: u32) -> Self {
        Self {
            time: Time::in_seconds(seconds, factor),
            active: false,
        }
    }

    /// A new inactive timer holding the given seconds at the scene's tick rate.
    pub fn in_app_seconds(seconds: f64, config: &SceneConfig) -> Self {
        Self::in_seconds(seconds, config.ticks_per_second)
    }
}

impl Clock for Timer {
    type Message = ();

    fn time(&self) -> &Time {
        &self.time
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn tick(&mut self) -> Option<()> {
        if self.active {
            self.time.increment();
        }
        None
    }

    fn reset(&mut self, active: bool) {
        self.time.set_counter(0);
        self.active = active;
    }
}

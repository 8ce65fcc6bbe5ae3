// Modules
mod countdown;
mod resettimer;
mod time;
mod timer;

// Re-exports
pub use countdown::{CountDown, CountUp};
pub use resettimer::ResetTimer;
pub use time::Time;
pub use timer::Timer;

/// Per-frame clocks with an activity flag.
///
/// Instead of invoking a callback, a clock returns its message from [Clock::tick] on the tick it fires.
pub trait Clock {
    /// The message returned when the clock fires.
    type Message;

    /// The current time.
    fn time(&self) -> &Time;
    /// Whether the clock is counting.
    fn is_active(&self) -> bool;
    /// Set whether the clock is counting.
    fn set_active(&mut self, active: bool);
    /// Advance by one tick when active. Returns the message on the tick the clock fires.
    ///
    /// A no-op returning `None` when inactive.
    fn tick(&mut self) -> Option<Self::Message>;
    /// Reset the counter and set the activity.
    fn reset(&mut self, active: bool);

    /// Start counting.
    fn start(&mut self) {
        self.set_active(true);
    }
    /// Stop counting.
    fn stop(&mut self) {
        self.set_active(false);
    }
    /// Toggle counting.
    fn toggle_active(&mut self) {
        let active = self.is_active();
        self.set_active(!active);
    }
    /// The raw tick counter.
    fn counter(&self) -> i64 {
        self.time().counter()
    }
    /// The counter as a fraction of the clock's base. `None` for clocks without a base, or a base of zero.
    fn progress(&self) -> Option<f64> {
        None
    }
}

/// `counter / base`, `None` for a base of zero.
fn fraction(counter: i64, base: i64) -> Option<f64> {
    (base != 0).then(|| counter as f64 / base as f64)
}

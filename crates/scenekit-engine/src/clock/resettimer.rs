// Imports
use super::{Clock, Time};
use crate::SceneConfig;

/// Counts up to its base repeatedly, restarting from zero every time it fires.
///
/// With an iteration budget the timer deactivates after firing that many times, its counter pinned at the base.
/// Without one it runs until stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetTimer<M = ()> {
    time: Time,
    active: bool,
    base: i64,
    max_iter: Option<u32>,
    remaining: Option<u32>,
    message: M,
}

impl ResetTimer {
    /// A new inactive reset timer.
    pub fn new(base: i64, factor: u32, max_iter: Option<u32>) -> Self {
        Self::with_message(base, factor, max_iter, ())
    }

    /// A new inactive reset timer counting up to the given seconds.
    pub fn in_seconds(seconds: f64, factor: u32, max_iter: Option<u32>) -> Self {
        let time = Time::in_seconds(seconds, factor);
        Self::new(time.counter(), time.factor(), max_iter)
    }

    /// A new inactive reset timer counting up to the given seconds at the scene's tick rate.
    pub fn in_app_seconds(seconds: f64, config: &SceneConfig, max_iter: Option<u32>) -> Self {
        Self::in_seconds(seconds, config.ticks_per_second, max_iter)
    }
}

impl<M> ResetTimer<M>
where
    M: Clone,
{
    /// A new inactive reset timer, returning the message every time it fires.
    pub fn with_message(base: i64, factor: u32, max_iter: Option<u32>, message: M) -> Self {
        Self {
            time: Time::new(0, factor),
            active: false,
            base,
            max_iter,
            remaining: max_iter,
            message,
        }
    }

    /// The value counted up to.
    pub fn base(&self) -> i64 {
        self.base
    }

    /// Set the base and restart the counter from zero.
    pub fn set_base(&mut self, base: i64) {
        self.base = base;
        self.time.set_counter(0);
    }

    /// The iteration budget, `None` when unlimited.
    pub fn max_iter(&self) -> Option<u32> {
        self.max_iter
    }

    /// The remaining iterations, `None` when unlimited.
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    /// The message returned when firing.
    pub fn message(&self) -> &M {
        &self.message
    }

    /// Replace the message.
    pub fn set_message(&mut self, message: M) {
        self.message = message;
    }
}

impl<M> Clock for ResetTimer<M>
where
    M: Clone,
{
    type Message = M;

    fn time(&self) -> &Time {
        &self.time
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn tick(&mut self) -> Option<M> {
        if !self.active {
            return None;
        }
        self.time.increment();
        if self.time.counter() < self.base {
            return None;
        }

        self.remaining = self.remaining.map(|r| r.saturating_sub(1));
        if self.remaining == Some(0) {
            self.active = false;
            self.time.set_counter(self.base);
        } else {
            self.time.set_counter(0);
        }
        Some(self.message.clone())
    }

    fn progress(&self) -> Option<f64> {
        super::fraction(self.time.counter(), self.base)
    }

    fn reset(&mut self, active: bool) {
        self.time.set_counter(0);
        self.active = active;
        self.remaining = self.max_iter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Timer;

    #[test]
    fn restarts_until_exhausted() {
        let mut timer = ResetTimer::new(3, 1, Some(2));
        timer.start();

        let fired: Vec<i64> = (1..=6).filter(|_| timer.tick().is_some()).collect();
        assert_eq!(fired, vec![3, 6]);
        assert!(!timer.is_active());
        assert_eq!(timer.counter(), 3);
        assert_eq!(timer.remaining(), Some(0));
    }

    #[test]
    fn restarts_at_zero() {
        let mut timer = ResetTimer::with_message(3, 1, Some(2), 'x');
        timer.start();
        timer.tick();
        timer.tick();
        assert_eq!(timer.tick(), Some('x'));
        assert_eq!(timer.counter(), 0);
        assert!(timer.is_active());

        timer.reset(false);
        assert_eq!(timer.remaining(), Some(2));
    }

    #[test]
    fn from_seconds_and_messages() {
        let mut timer = ResetTimer::in_seconds(0.5, 4, None);
        assert_eq!(timer.base(), 2);
        assert_eq!(timer.time().factor(), 4);
        assert_eq!(timer.max_iter(), None);

        let config = SceneConfig::default();
        assert_eq!(ResetTimer::in_app_seconds(1.0, &config, Some(1)).base(), 60);

        let mut messages = ResetTimer::with_message(1, 1, None, "first");
        messages.start();
        assert_eq!(messages.tick(), Some("first"));
        messages.set_message("second");
        assert_eq!(messages.message(), &"second");
        assert_eq!(messages.tick(), Some("second"));

        timer.start();
        timer.tick();
        assert!(timer.tick().is_some());
    }

    #[test]
    fn progress_restarts_with_the_counter() {
        let mut timer = ResetTimer::new(2, 1, None);
        timer.start();
        timer.tick();
        assert_eq!(timer.progress(), Some(0.5));
        timer.tick();
        assert_eq!(timer.progress(), Some(0.0));
        assert_eq!(Timer::new(5, 1).progress(), None);
    }

    #[test]
    fn unlimited() {
        let mut timer = ResetTimer::new(2, 1, None);
        timer.start();
        let fired = (0..100).filter(|_| timer.tick().is_some()).count();
        assert_eq!(fired, 50);
        assert!(timer.is_active());
        assert_eq!(timer.remaining(), None);
    }
}

// Imports
use super::{Clock, Time};
use crate::SceneConfig;

/// Counts down from its base while active, firing and deactivating once the counter reaches zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountDown<M = ()> {
    time: Time,
    active: bool,
    base: i64,
    message: M,
}

impl CountDown {
    /// A new inactive countdown from `base`.
    pub fn new(base: i64, factor: u32) -> Self {
        Self::with_message(base, factor, ())
    }

    /// A new inactive countdown from the given seconds.
    pub fn in_seconds(seconds: f64, factor: u32) -> Self {
        let time = Time::in_seconds(seconds, factor);
        Self::new(time.counter(), time.factor())
    }

    /// A new inactive countdown from the given seconds at the scene's tick rate.
    pub fn in_app_seconds(seconds: f64, config: &SceneConfig) -> Self {
        Self::in_seconds(seconds, config.ticks_per_second)
    }
}

impl<M> CountDown<M>
where
    M: Clone,
{
    /// A new inactive countdown from `base`, returning the message when it fires.
    pub fn with_message(base: i64, factor: u32, message: M) -> Self {
        Self {
            time: Time::new(base, factor),
            active: false,
            base,
            message,
        }
    }

    /// The value counted down from.
    pub fn base(&self) -> i64 {
        self.base
    }

    /// Set the base and restart the counter from it.
    pub fn set_base(&mut self, base: i64) {
        self.base = base;
        self.time.set_counter(base);
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

impl<M> Clock for CountDown<M>
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
        self.time.decrement();
        if self.time.counter() <= 0 {
            self.active = false;
            return Some(self.message.clone());
        }
        None
    }

    fn progress(&self) -> Option<f64> {
        super::fraction(self.time.counter(), self.base)
    }

    fn reset(&mut self, active: bool) {
        self.time.set_counter(self.base);
        self.active = active;
    }
}

/// Counts up from zero while active, firing and deactivating once the counter reaches its base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountUp<M = ()> {
    time: Time,
    active: bool,
    base: i64,
    message: M,
}

impl CountUp {
    /// A new inactive count up to `base`.
    pub fn new(base: i64, factor: u32) -> Self {
        Self::with_message(base, factor, ())
    }

    /// A new inactive count up to the given seconds.
    pub fn in_seconds(seconds: f64, factor: u32) -> Self {
        let time = Time::in_seconds(seconds, factor);
        Self::new(time.counter(), time.factor())
    }

    /// A new inactive count up to the given seconds at the scene's tick rate.
    pub fn in_app_seconds(seconds: f64, config: &SceneConfig) -> Self {
        Self::in_seconds(seconds, config.ticks_per_second)
    }
}

impl<M> CountUp<M>
where
    M: Clone,
{
    /// A new inactive count up to `base`, returning the message when it fires.
    pub fn with_message(base: i64, factor: u32, message: M) -> Self {
        Self {
            time: Time::new(0, factor),
            active: false,
            base,
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

    /// The message returned when firing.
    pub fn message(&self) -> &M {
        &self.message
    }

    /// Replace the message.
    pub fn set_message(&mut self, message: M) {
        self.message = message;
    }
}

impl<M> Clock for CountUp<M>
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
        if self.time.counter() >= self.base {
            self.active = false;
            return Some(self.message.clone());
        }
        None
    }

    fn progress(&self) -> Option<f64> {
        super::fraction(self.time.counter(), self.base)
    }

    fn reset(&mut self, active: bool) {
        self.time.set_counter(0);
        self.active = active;
    }
}

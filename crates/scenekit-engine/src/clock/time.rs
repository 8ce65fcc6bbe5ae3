// Imports
use crate::SceneConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};

/// A tick counter with a conversion factor from ticks to seconds. The factor is at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "TimeDef", rename = "time")]
pub struct Time {
    #[serde(rename = "counter")]
    counter: i64,
    #[serde(rename = "factor")]
    factor: u32,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(default, rename = "time")]
struct TimeDef {
    #[serde(rename = "counter")]
    counter: i64,
    #[serde(rename = "factor")]
    factor: u32,
}

impl Default for TimeDef {
    fn default() -> Self {
        Self {
            counter: 0,
            factor: 1,
        }
    }
}

impl From<TimeDef> for Time {
    fn from(def: TimeDef) -> Self {
        Self::new(def.counter, def.factor)
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            counter: 0,
            factor: 1,
        }
    }
}

impl Time {
    /// A new time. A factor of zero is replaced by one.
    pub fn new(counter: i64, factor: u32) -> Self {
        if factor == 0 {
            tracing::warn!("Time factor must be at least 1, using 1 instead");
        }
        Self {
            counter,
            factor: factor.max(1),
        }
    }

    /// A time holding the given seconds, truncated to whole ticks.
    pub fn in_seconds(seconds: f64, factor: u32) -> Self {
        let factor = factor.max(1);
        Self::new((seconds * f64::from(factor)) as i64, factor)
    }

    /// A time holding the given seconds, ticking at the scene's tick rate.
    pub fn in_app_seconds(seconds: f64, config: &SceneConfig) -> Self {
        Self::in_seconds(seconds, config.ticks_per_second)
    }

    /// The raw tick counter.
    pub fn counter(&self) -> i64 {
        self.counter
    }

    /// Set the raw tick counter.
    pub fn set_counter(&mut self, counter: i64) {
        self.counter = counter;
    }

    /// Ticks per second.
    pub fn factor(&self) -> u32 {
        self.factor
    }

    /// Set the ticks per second. A factor of zero is replaced by one.
    pub fn set_factor(&mut self, factor: u32) {
        self.factor = factor.max(1);
    }

    pub(crate) fn increment(&mut self) {
        self.counter += 1;
    }

    pub(crate) fn decrement(&mut self) {
        self.counter -= 1;
    }

    /// The time in milliseconds.
    pub fn milliseconds(&self) -> f64 {
        self.counter as f64 / f64::from(self.factor) * 1000.0
    }

    /// The time in whole seconds, rounded towards negative infinity.
    pub fn seconds(&self) -> i64 {
        self.counter.div_euclid(i64::from(self.factor))
    }

    /// The time in whole minutes.
    pub fn minutes(&self) -> i64 {
        self.seconds().div_euclid(60)
    }

    /// The time in whole hours.
    pub fn hours(&self) -> i64 {
        self.minutes().div_euclid(60)
    }

    /// The time as `(hours, minutes, seconds)`, minutes and seconds within `[0, 60)`.
    pub fn time(&self) -> (i64, i64, i64) {
        (
            self.hours(),
            self.minutes().rem_euclid(60),
            self.seconds().rem_euclid(60),
        )
    }

    /// The time formatted as `mm:ss`, or as `hh:mm:ss` from one hour onwards.
    pub fn time_string(&self) -> String {
        let (hours, minutes, seconds) = self.time();
        if hours == 0 {
            format!("{minutes:02}:{seconds:02}")
        } else {
            format!("{hours:02}:{minutes:02}:{seconds:02}")
        }
    }

    /// The time with the counter divided by `rhs`, rounded towards negative infinity. `None` for zero.
    pub fn checked_div(self, rhs: i64) -> Option<Self> {
        Some(Self {
            counter: self.counter.checked_div_euclid(rhs)?,
            factor: self.factor,
        })
    }

    /// The time with the non-negative remainder of the counter divided by `rhs`. `None` for zero.
    pub fn checked_rem(self, rhs: i64) -> Option<Self> {
        Some(Self {
            counter: self.counter.checked_rem_euclid(rhs)?,
            factor: self.factor,
        })
    }

    /// The counter of another time, converted into this factor.
    fn converted_counter(&self, other: &Self) -> i64 {
        other.counter * i64::from(self.factor) / i64::from(other.factor)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time_string())
    }
}

impl Add for Time {
    type Output = Self;

    /// The sum keeps the factor of `self`.
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            counter: self.counter + self.converted_counter(&rhs),
            factor: self.factor,
        }
    }
}

impl Sub for Time {
    type Output = Self;

    /// The difference keeps the factor of `self`.
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            counter: self.counter - self.converted_counter(&rhs),
            factor: self.factor,
        }
    }
}

impl Mul<i64> for Time {
    type Output = Self;

    fn mul(self, rhs: i64) -> Self::Output {
        Self {
            counter: self.counter * rhs,
            factor: self.factor,
        }
    }
}

fn nonzero_divisor(rhs: i64) -> i64 {
    if rhs == 0 {
        tracing::warn!("Time divided by zero, dividing by 1 instead");
        1
    } else {
        rhs
    }
}

impl Div<i64> for Time {
    type Output = Self;

    /// Euclidean division of the counter. A divisor of zero is replaced by one.
    fn div(self, rhs: i64) -> Self::Output {
        Self {
            counter: self.counter.div_euclid(nonzero_divisor(rhs)),
            factor: self.factor,
        }
    }
}

impl Rem<i64> for Time {
    type Output = Self;

    /// Euclidean remainder of the counter. A divisor of zero is replaced by one.
    fn rem(self, rhs: i64) -> Self::Output {
        Self {
            counter: self.counter.rem_euclid(nonzero_divisor(rhs)),
            factor: self.factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn conversions() {
        let time = Time::new(3_725 * 60, 60);
        assert_eq!(time.seconds(), 3_725);
        assert_eq!(time.minutes(), 62);
        assert_eq!(time.hours(), 1);
        assert_eq!(time.time(), (1, 2, 5));
        assert_relative_eq!(Time::new(30, 60).milliseconds(), 500.0);
    }

    #[test]
    fn formatting() {
        assert_eq!(Time::new(65, 1).time_string(), "01:05");
        assert_eq!(Time::new(3_725, 1).to_string(), "01:02:05");
        assert_eq!(Time::new(0, 60).to_string(), "00:00");
    }

    #[test]
    fn from_seconds() {
        assert_eq!(Time::in_seconds(1.5, 60).counter(), 90);
        assert_eq!(Time::in_seconds(0.99, 1).counter(), 0);

        let config = SceneConfig::default();
        assert_eq!(Time::in_app_seconds(2.0, &config).counter(), 120);
        assert_eq!(Time::in_app_seconds(2.0, &config).factor(), 60);
    }

    #[test]
    fn arithmetic() {
        let a = Time::new(120, 60);
        let b = Time::new(3, 1);

        // 3 seconds at factor 1 are 180 ticks at factor 60.
        assert_eq!((a + b).counter(), 300);
        assert_eq!((a - b).counter(), -60);
        assert_eq!((a + b).factor(), 60);
        assert_eq!((a * 3).counter(), 360);
        assert_eq!((a / 7).counter(), 17);
        assert_eq!((a % 7).counter(), 1);
    }

    #[test]
    fn zero_factor_is_replaced() {
        assert_eq!(Time::new(10, 0).factor(), 1);
        assert_eq!(Time::new(10, 0).seconds(), 10);

        let mut time = Time::new(10, 5);
        time.set_factor(0);
        assert_eq!(time.seconds(), 10);
    }

    #[test]
    fn deserializing_keeps_the_factor_valid() {
        let time: Time = serde_json::from_str(r#"{ "counter": 90, "factor": 0 }"#).unwrap();
        assert_eq!(time.factor(), 1);
        assert_eq!(time.seconds(), 90);

        let time: Time = serde_json::from_str(r#"{ "counter": 90 }"#).unwrap();
        assert_eq!(time, Time::new(90, 1));

        let round_trip: Time =
            serde_json::from_str(&serde_json::to_string(&Time::new(7, 30)).unwrap()).unwrap();
        assert_eq!(round_trip, Time::new(7, 30));
    }

    #[test]
    fn division_by_zero() {
        let time = Time::new(-7, 60);
        assert_eq!((time / 0).counter(), -7);
        assert_eq!((time % 0).counter(), 0);
        assert_eq!(time.checked_div(0), None);
        assert_eq!(time.checked_rem(0), None);
        assert_eq!(time.checked_div(2), Some(Time::new(-4, 60)));
        assert_eq!(time.checked_rem(2), Some(Time::new(1, 60)));
    }
}

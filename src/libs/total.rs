//! Interval durations and the running daily total.
//!
//! Durations are computed going forward from the start time, wrapping
//! past midnight when the end is numerically earlier: an 8:00pm start
//! with a 7:59pm end means 23 hours and 59 minutes worked, not an error.
//! The program assumes no single interval reaches a full 24 hours.

use crate::libs::clock::{ClockTime, MINUTES_PER_DAY};
use chrono::Duration;

/// Time elapsed going forward from `start` to `end`.
///
/// Always non-negative and under 24 hours; zero only when the two times
/// are identical, which the session treats as the stop sentinel before
/// ever computing a duration.
pub fn interval(start: &ClockTime, end: &ClockTime) -> Duration {
    let start = i64::from(start.minutes_since_midnight());
    let end = i64::from(end.minutes_since_midnight());
    Duration::minutes((end - start).rem_euclid(MINUTES_PER_DAY))
}

/// Accumulated work time for a single day's batch of intervals.
///
/// The minutes field is kept normalized to 0..=59; whole hours carry into
/// the hours field on every accumulation. One of these lives per day and
/// starts over at zero for the next day's input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DailyTotal {
    pub hours: i64,
    pub minutes: i64,
}

impl DailyTotal {
    /// Adds one interval's duration to the running total.
    ///
    /// Repeatable across an unbounded sequence of intervals; the minutes
    /// field is renormalized after every call.
    pub fn accumulate(&mut self, delta: Duration) {
        self.minutes += delta.num_minutes();
        self.hours += self.minutes / 60;
        self.minutes %= 60;
    }

    /// The total as a fractional hour count, e.g. 9h45m as 9.75.
    pub fn as_fractional_hours(&self) -> f64 {
        self.hours as f64 + self.minutes as f64 / 60.0
    }
}

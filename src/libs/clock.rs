//! Twelve-hour clock times and their 24-hour minute representation.
//!
//! The program reads times as the user writes them on a punch card:
//! `HH:MMcc`, where `cc` is an AM/PM meridiem indicator. All arithmetic
//! happens on a minutes-since-midnight representation, so this module
//! owns the conversion between the two.
//!
//! ## Conversion Rules
//!
//! - 12:00am maps to minute 0 (midnight), not hour 12
//! - 12:00pm maps to minute 720 (noon)
//! - Every other PM hour adds 12 to the hour before conversion
//!
//! ## Examples
//!
//! ```rust
//! use punchcard::libs::clock::{ClockTime, Meridiem};
//!
//! let start = ClockTime::new(8, 30, Meridiem::Pm);
//! assert_eq!(start.minutes_since_midnight(), 20 * 60 + 30);
//! assert_eq!(start.to_string(), "08:30pm");
//! ```

use std::fmt::{self, Display};

/// Number of minutes in one day. Durations wrap modulo this value.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// AM/PM indicator disambiguating a 12-hour clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    /// Maps a meridiem letter to its indicator, case-insensitively.
    ///
    /// Only the first letter is significant ('a' or 'p'); the trailing 'm'
    /// of "am"/"pm" is handled by the tokenizer. Returns `None` for any
    /// other letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_lowercase() {
            'a' => Some(Meridiem::Am),
            'p' => Some(Meridiem::Pm),
            _ => None,
        }
    }
}

impl Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => write!(f, "am"),
            Meridiem::Pm => write!(f, "pm"),
        }
    }
}

/// A validated 12-hour wall-clock time.
///
/// Invariants are enforced at parse time: hour in 1..=12, minute in 0..=59.
/// Equality compares hour, minute, and meridiem, which is what the session
/// loop relies on to recognize the stop sentinel (identical start and end).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
    meridiem: Meridiem,
}

impl ClockTime {
    pub fn new(hour: u32, minute: u32, meridiem: Meridiem) -> Self {
        debug_assert!((1..=12).contains(&hour));
        debug_assert!(minute < 60);
        Self { hour, minute, meridiem }
    }

    /// Converts to minutes since midnight, in 0..1440.
    ///
    /// `hour % 12` collapses 12am to hour 0 and leaves 12pm at hour 12
    /// once the PM offset is applied.
    pub fn minutes_since_midnight(&self) -> u32 {
        let mut hour = self.hour % 12;
        if self.meridiem == Meridiem::Pm {
            hour += 12;
        }
        hour * 60 + self.minute
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}{}", self.hour, self.minute, self.meridiem)
    }
}

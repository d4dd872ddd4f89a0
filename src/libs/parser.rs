//! Parsing and validation of `HH:MMcc` time entries.
//!
//! A time entry is an hour, a colon, a minute, and a meridiem indicator,
//! with optional whitespace between the pieces: `8:30pm`, `12 : 05 AM`.
//! Only the first meridiem letter matters; a trailing `m` is consumed and
//! ignored, so `8:30p` and `8:30pm` parse identically.
//!
//! Diagnosis is deliberately separated from presentation: a failed parse
//! yields a structured list of every violated constraint, and the caller
//! decides how to show it. The checks are independent, so an entry like
//! `0:99xm` reports three violations in a single pass.
//!
//! Discarding the rest of a bad line is the caller's job, not the
//! parser's; the parser only ever consumes the token it was asked for.

use crate::libs::clock::{ClockTime, Meridiem};
use crate::libs::scanner::Scanner;
use std::io::{self, Read};
use thiserror::Error;

/// A single violated constraint in a time entry.
///
/// The `Display` text of each variant is the user-facing diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeViolation {
    #[error("HOUR TOO SMALL: \"{0}\", should be greater than 0.")]
    HourTooSmall(i64),
    #[error("HOUR TOO BIG: \"{0}\", should be less than 13.")]
    HourTooBig(i64),
    #[error("MINUTE TOO SMALL: \"{0}\", should be greater than -1.")]
    MinuteTooSmall(i64),
    #[error("MINUTE TOO BIG: \"{0}\", should be less than 60.")]
    MinuteTooBig(i64),
    #[error("UNRECOGNIZED MERIDIEM: \"{0}m\", should be \"am\" or \"pm\".")]
    UnrecognizedMeridiem(char),
    #[error("NOT A TIME: expected the format HH:MMcc, like \"8:30pm\".")]
    NotATime,
}

/// Why a time entry could not be produced.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The entry was readable but violated one or more constraints.
    #[error("the time entry is not valid")]
    Invalid(Vec<TimeViolation>),
    /// The stream ended in the middle of the entry. This is a termination
    /// signal for the session, not a user error.
    #[error("input ended in the middle of a time entry")]
    Truncated,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Reads the next time entry from the stream.
///
/// Skips leading whitespace, then consumes `<int>:<int><letter>[m]` with
/// whitespace allowed around the colon and before the meridiem. On
/// success the returned [`ClockTime`] satisfies all invariants; on
/// validation failure every violated constraint is reported together.
pub fn read_time<R: Read>(scanner: &mut Scanner<R>) -> Result<ClockTime, ReadError> {
    if scanner.skip_whitespace()?.is_none() {
        return Err(ReadError::Truncated);
    }
    let hour = match scanner.read_integer()? {
        Some(hour) => hour,
        None => return Err(ReadError::Invalid(vec![TimeViolation::NotATime])),
    };

    match scanner.skip_whitespace()? {
        Some(b':') => {
            scanner.next_byte()?;
        }
        Some(_) => return Err(ReadError::Invalid(vec![TimeViolation::NotATime])),
        None => return Err(ReadError::Truncated),
    }

    if scanner.skip_whitespace()?.is_none() {
        return Err(ReadError::Truncated);
    }
    let minute = match scanner.read_integer()? {
        Some(minute) => minute,
        None => return Err(ReadError::Invalid(vec![TimeViolation::NotATime])),
    };

    if scanner.skip_whitespace()?.is_none() {
        return Err(ReadError::Truncated);
    }
    let letter = match scanner.next_byte()? {
        Some(byte) if byte.is_ascii_alphabetic() => byte.to_ascii_lowercase() as char,
        Some(_) => return Err(ReadError::Invalid(vec![TimeViolation::NotATime])),
        None => return Err(ReadError::Truncated),
    };
    // The trailing 'm' of "am"/"pm" is implied and ignored.
    if let Some(b'm') | Some(b'M') = scanner.peek()? {
        scanner.next_byte()?;
    }

    let mut violations = Vec::new();
    if hour <= 0 {
        violations.push(TimeViolation::HourTooSmall(hour));
    }
    if hour >= 13 {
        violations.push(TimeViolation::HourTooBig(hour));
    }
    if minute < 0 {
        violations.push(TimeViolation::MinuteTooSmall(minute));
    }
    if minute >= 60 {
        violations.push(TimeViolation::MinuteTooBig(minute));
    }
    let meridiem = Meridiem::from_letter(letter);
    if meridiem.is_none() {
        violations.push(TimeViolation::UnrecognizedMeridiem(letter));
    }

    match meridiem {
        Some(meridiem) if violations.is_empty() => {
            Ok(ClockTime::new(hour as u32, minute as u32, meridiem))
        }
        _ => Err(ReadError::Invalid(violations)),
    }
}

//! The workplace quarter-hour rounding policy.
//!
//! Employees report hours rounded to the nearest quarter-hour (X.00,
//! X.25, X.50, X.75). The policy is the integer rule
//! `(minutes + 7) / 15 * 15`: minute remainders of 0 through 7 round down
//! to the current quarter, 8 through 14 round up to the next. The cutoff
//! is asymmetric on purpose and must not be replaced with a symmetric
//! "nearest" rounding.

use crate::libs::total::DailyTotal;

/// Rounds a daily total to the nearest quarter-hour.
///
/// Rounding up from 53..=59 minutes produces a full hour, which carries:
/// the minutes reset to zero and the hour count increments.
pub fn round_to_quarter(total: &DailyTotal) -> DailyTotal {
    let mut hours = total.hours;
    let mut minutes = (total.minutes + 7) / 15 * 15;
    if minutes == 60 {
        minutes = 0;
        hours += 1;
    }
    DailyTotal { hours, minutes }
}

use crate::libs::clock::ClockTime;
use crate::libs::parser::TimeViolation;
use crate::libs::total::DailyTotal;

/// Every user-facing message the program can print.
///
/// Keeping the whole vocabulary in one enum keeps wording consistent and
/// lets the session loop stay free of format strings. The `Display` impl
/// in [`super::display`] owns the actual text.
#[derive(Debug, Clone)]
pub enum Message {
    // === SESSION MESSAGES ===
    Welcome,
    PromptTimes,
    StartEcho(ClockTime),
    EndEcho(ClockTime),
    IntervalWorked(DailyTotal),

    // === DAY REPORT MESSAGES ===
    ActualTotal(DailyTotal),
    RoundedTotal(f64),

    // === DIAGNOSTIC MESSAGES ===
    InvalidTime(TimeViolation),
    BadStartTime,
    BadEndTime,
    MissingIntervalSeparator,
}

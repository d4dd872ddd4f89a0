//! The interactive punch card session loop.
//!
//! Drives the PROMPT_DAY → READ_INTERVAL → REPORT_DAY cycle: prompt for a
//! day's times, parse one or more `start-end` pairs separated by commas,
//! echo and report each interval, then report the day's actual and
//! rounded totals. The loop owns the only mutable state in the program,
//! the current day's [`DailyTotal`], and threads it explicitly through
//! the day batch rather than keeping it in module state.
//!
//! ## Recovery and termination
//!
//! A malformed time never aborts the program: its diagnostics print, the
//! rest of the line is discarded, and the day's batch starts over from
//! the prompt. The program ends cleanly in exactly two ways: end of
//! input, or a start time entered identical to its end time (the stop
//! sentinel).

use crate::libs::messages::Message;
use crate::libs::parser::{self, ReadError};
use crate::libs::rounding::round_to_quarter;
use crate::libs::scanner::{Scan, Scanner};
use crate::libs::total::{interval, DailyTotal};
use crate::{msg_debug, msg_error, msg_print};
use anyhow::Result;
use std::io::Read;

/// How a session ended. Both outcomes exit with status 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user entered an identical start and end time.
    Sentinel,
    /// The input stream ran out.
    EndOfInput,
}

/// What happened to one day's batch of intervals.
enum DayOutcome {
    /// The day completed at a line end; more days may follow.
    Complete(DailyTotal),
    /// The day completed right at the end of input.
    CompleteEof(DailyTotal),
    /// A malformed entry was diagnosed; restart the batch from the prompt.
    Retry,
    /// The stop sentinel was entered.
    Sentinel,
    /// The input ran out before the day produced an interval.
    Eof,
}

/// The session state machine over a readable input stream.
pub struct Session<R: Read> {
    scanner: Scanner<R>,
}

impl<R: Read> Session<R> {
    pub fn new(reader: R) -> Self {
        Self { scanner: Scanner::new(reader) }
    }

    /// Runs the loop until the sentinel or end of input.
    pub fn run(&mut self) -> Result<Outcome> {
        loop {
            msg_print!(Message::PromptTimes);
            match self.read_day()? {
                DayOutcome::Complete(total) => self.report_day(&total),
                DayOutcome::CompleteEof(total) => {
                    self.report_day(&total);
                    return Ok(Outcome::EndOfInput);
                }
                DayOutcome::Retry => continue,
                DayOutcome::Sentinel => {
                    msg_debug!("stop sentinel entered, terminating");
                    return Ok(Outcome::Sentinel);
                }
                DayOutcome::Eof => return Ok(Outcome::EndOfInput),
            }
        }
    }

    /// Reads one day's intervals, accumulating into a fresh total.
    fn read_day(&mut self) -> Result<DayOutcome> {
        let mut total = DailyTotal::default();
        loop {
            let start = match parser::read_time(&mut self.scanner) {
                Ok(time) => time,
                Err(error) => return self.recover(error, Message::BadStartTime),
            };

            // Anything between the start time and the hyphen is junk.
            match self.scanner.skip_until(b'-')? {
                Scan::Delimiter => {}
                Scan::LineEnd => {
                    msg_error!(Message::MissingIntervalSeparator);
                    return Ok(DayOutcome::Retry);
                }
                Scan::EndOfInput => return Ok(DayOutcome::Eof),
            }

            let end = match parser::read_time(&mut self.scanner) {
                Ok(time) => time,
                Err(error) => return self.recover(error, Message::BadEndTime),
            };

            msg_print!(Message::StartEcho(start));
            msg_print!(Message::EndEcho(end));

            // Identical start and end is the stop sentinel, not a
            // zero-length interval.
            if start == end {
                return Ok(DayOutcome::Sentinel);
            }

            let worked = interval(&start, &end);
            let mut entry = DailyTotal::default();
            entry.accumulate(worked);
            msg_print!(Message::IntervalWorked(entry));
            total.accumulate(worked);

            // A comma continues the same day; a line end or the end of
            // input finishes it.
            match self.scanner.skip_until(b',')? {
                Scan::Delimiter => continue,
                Scan::LineEnd => return Ok(DayOutcome::Complete(total)),
                Scan::EndOfInput => return Ok(DayOutcome::CompleteEof(total)),
            }
        }
    }

    /// Prints the end-of-day report: actual total, then the rounded one.
    fn report_day(&self, total: &DailyTotal) {
        msg_print!(Message::ActualTotal(*total));
        let rounded = round_to_quarter(total);
        msg_print!(Message::RoundedTotal(rounded.as_fractional_hours()), true);
    }

    /// Diagnoses a failed time read and resynchronizes the stream.
    ///
    /// Every violation prints on its own line before the start/end
    /// summary, then the rest of the input line is discarded so the next
    /// prompt starts clean.
    fn recover(&mut self, error: ReadError, summary: Message) -> Result<DayOutcome> {
        match error {
            ReadError::Invalid(violations) => {
                for violation in violations {
                    msg_error!(Message::InvalidTime(violation));
                }
                msg_error!(summary);
                match self.scanner.flush_line()? {
                    Scan::EndOfInput => Ok(DayOutcome::Eof),
                    _ => Ok(DayOutcome::Retry),
                }
            }
            ReadError::Truncated => Ok(DayOutcome::Eof),
            ReadError::Io(error) => Err(error.into()),
        }
    }
}

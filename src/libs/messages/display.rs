//! Display implementation for punchcard application messages.
//!
//! The single source of truth for all user-facing text. Messages carry
//! structured data; this module turns them into the exact strings the
//! terminal shows, so the session logic never embeds format strings and
//! stays testable without capturing output.
//!
//! Report lines follow a punch card layout: a label, a tab, and
//! the value, with hours and minutes zero-padded to two digits and the
//! rounded total shown as a two-decimal fractional hour count.

use super::types::Message;
use std::fmt::{self, Display};

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::Welcome => concat!(
                "Welcome to PUNCHCARD! This program is meant to help you record your work hours\n",
                "as an employee. To get started, just enter your start time and end time, in the\n",
                "format HH:MMcc-HH:MMcc. For example, if you worked from noon to 3pm today, you'd\n",
                "enter 12:00pm-3:00pm. You can list several sessions for one day separated by\n",
                "commas, like 9:00am-1:00pm, 2:00pm-5:30pm. You can quit the program by closing\n",
                "this window, pressing Ctrl + C, or entering a start time and end time that are\n",
                "identical (such as 1:00pm-1:00pm)."
            )
            .to_string(),
            Message::PromptTimes => "Enter your times:".to_string(),
            Message::StartEcho(time) => format!("START:\t{}", time),
            Message::EndEcho(time) => format!("END:\t{}", time),
            Message::IntervalWorked(total) => {
                format!("WORKED:\t{:02} hours and {:02} minutes.", total.hours, total.minutes)
            }

            // === DAY REPORT MESSAGES ===
            Message::ActualTotal(total) => {
                format!("ACTUAL TIME:\t{:02} hours and {:02} minutes.", total.hours, total.minutes)
            }
            Message::RoundedTotal(hours) => format!("ROUNDED TIME:\t{:.2} hours.", hours),

            // === DIAGNOSTIC MESSAGES ===
            Message::InvalidTime(violation) => violation.to_string(),
            Message::BadStartTime => "Something was wrong with your given start time!".to_string(),
            Message::BadEndTime => "Something was wrong with your given end time!".to_string(),
            Message::MissingIntervalSeparator => {
                "Expected a '-' between the start time and end time.".to_string()
            }
        };
        write!(f, "{}", text)
    }
}

//! # Punchcard - Quarter-Hour Work Time Calculator
//!
//! A terminal utility for turning self-reported clock-in/clock-out times
//! into total hours worked, rounded to the nearest quarter-hour per a
//! fixed workplace policy.
//!
//! ## Features
//!
//! - **Time Parsing**: Free-form `HH:MMcc` entries with structured,
//!   multi-violation diagnostics
//! - **Overnight Shifts**: Durations wrap safely past midnight, so
//!   8:00pm-7:59pm means 23 hours and 59 minutes
//! - **Multi-Interval Days**: Several comma-separated sessions accumulate
//!   into one daily total
//! - **Quarter-Hour Rounding**: The `(minutes + 7) / 15 * 15` workplace
//!   policy, with hour carry
//! - **Graceful Recovery**: Malformed entries are diagnosed and the day
//!   re-prompted; nothing short of end of input aborts the run
//!
//! ## Usage
//!
//! ```rust,no_run
//! use punchcard::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;

//! Core library modules for the punchcard application.
//!
//! Serves as the main entry point for all punchcard library components.
//!
//! ## Features
//!
//! - **Time Parsing**: Tokenizing and validating `HH:MMcc` time entries
//! - **Duration Math**: Wraparound-safe intervals and daily accumulation
//! - **Rounding Policy**: Quarter-hour rounding with hour carry
//! - **Session Loop**: The interactive prompt/parse/report state machine
//! - **Messaging**: Centralized user-facing text with tracing integration

pub mod clock;
pub mod messages;
pub mod parser;
pub mod rounding;
pub mod scanner;
pub mod session;
pub mod total;

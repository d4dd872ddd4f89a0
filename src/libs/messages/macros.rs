//! Convenient macros for application messaging and logging.
//!
//! The macros route every message through one of two channels: plain
//! console output for normal interactive use, or the `tracing` system
//! when debug mode is enabled. Debug mode is detected once from the
//! environment and cached, so the routing check is a memory read on the
//! hot path.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is considered enabled when either environment variable is
//! set:
//! - `PUNCHCARD_DEBUG`: application-specific debug flag
//! - `RUST_LOG`: standard Rust logging configuration
//!
//! ## Macro Categories
//!
//! - `msg_print!`: general message display (stdout / `tracing::info!`)
//! - `msg_error!`: diagnostics (stderr / `tracing::error!`)
//! - `msg_debug!`: debug-only messages, suppressed in normal mode

use std::sync::OnceLock;

/// Cached result of debug mode detection.
static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Checks if debug mode is enabled, with caching for performance.
///
/// The environment is consulted once per process; subsequent calls are
/// simple memory reads.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| {
        std::env::var("PUNCHCARD_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok()
    })
}

/// Prints a general message with automatic debug mode routing.
///
/// With a trailing `true` the message is wrapped in blank lines, used
/// for the banner and the end-of-day reports.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints an error message with ❌ prefix and automatic routing.
///
/// Diagnostics go to stderr in normal mode so scripted callers can keep
/// them apart from report output.
#[macro_export]
macro_rules! msg_error {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::error!("❌ {}", $msg);
        } else {
            eprintln!("❌ {}", $msg);
        }
    };
}

/// Debug-only message display with 🔍 prefix.
///
/// Completely suppressed unless debug mode is enabled.
#[macro_export]
macro_rules! msg_debug {
    ($($arg:tt)*) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", format!($($arg)*));
        }
    };
}

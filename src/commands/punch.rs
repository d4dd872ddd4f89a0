//! Interactive punch card session command.
//!
//! Prints the introductory banner, then hands standard input to the
//! session loop until the user enters the stop sentinel or the stream
//! ends. All of the interesting behavior lives in
//! [`crate::libs::session`]; this command only wires it to the terminal.

use crate::libs::messages::Message;
use crate::libs::session::Session;
use crate::{msg_debug, msg_print};
use anyhow::Result;
use clap::Args;
use std::io;

/// Command-line arguments for the punch session.
#[derive(Debug, Args)]
pub struct PunchArgs {
    /// Suppress the introductory banner
    ///
    /// Useful when piping prepared input through the program, where the
    /// banner is just noise ahead of the reports.
    #[arg(long, help = "Suppress the introductory banner")]
    no_banner: bool,
}

/// Executes the punch session over stdin/stdout.
pub fn cmd(args: PunchArgs) -> Result<()> {
    if !args.no_banner {
        msg_print!(Message::Welcome, true);
    }
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock());
    let outcome = session.run()?;
    msg_debug!("session finished: {:?}", outcome);
    Ok(())
}

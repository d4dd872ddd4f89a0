pub mod punch;

use crate::libs::messages::macros::is_debug_mode;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    punch: punch::PunchArgs,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        if is_debug_mode() {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
                .init();
        }
        punch::cmd(cli.punch)
    }
}

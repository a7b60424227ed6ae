use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Check and inspect live-reload server configuration.
#[derive(Parser, Debug)]
#[command(name = "sitewatch", version, about)]
pub struct Args {
    /// Config file path override (skips discovery).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. debug, or a full filter like sitewatch=trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Load and validate the configuration.
    Check,
    /// Print the resolved configuration as JSON.
    Show,
    /// Write a documented starter config file.
    Init {
        /// Where to write it (default: ./sitewatch.toml).
        path: Option<PathBuf>,

        /// Replace an existing file.
        #[arg(long)]
        force: bool,
    },
}

pub fn parse() -> Args {
    Args::parse()
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "asismap")]
#[command(
    about = "SAP Integration Suite adapter inventory and internal call mapper",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Plain output (no emoji, no colors)
    #[arg(long, global = true)]
    pub plain: bool,

    /// Configuration file (defaults to the nearest .asismap.toml)
    #[arg(long, global = true, env = "ASISMAP_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract adapters from every package export (.zip) in a directory
    Extract {
        /// Directory containing package export zips; the report is written here
        path: PathBuf,
    },

    /// Link ProcessDirect senders and receivers in a directory's report CSV
    Link {
        /// Directory containing exactly one report CSV
        path: PathBuf,
    },

    /// Extract, then link, in one directory
    Run {
        /// Directory containing package export zips
        path: PathBuf,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

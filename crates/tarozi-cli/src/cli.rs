//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tarozi_types::OutputFormat;

#[derive(Parser)]
#[command(name = "tarozi")]
#[command(version)]
#[command(about = "Weighbridge ticket register")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open a ticket register session (reads commands from stdin)
    Session {
        /// Read commands from a file instead of stdin
        #[arg(long, short = 's')]
        script: Option<PathBuf>,

        /// Start with the alarm relay switched off
        #[arg(long)]
        alarm_off: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Whether the alarm relay starts switched on
        #[arg(long)]
        set_alarm: Option<bool>,

        /// Set highlight markers, e.g. --set-markers '<' '>'
        #[arg(long, num_args = 2, value_names = ["OPEN", "CLOSE"], allow_hyphen_values = true)]
        set_markers: Option<Vec<String>>,

        /// Set the default log filter (e.g. warn, info, tarozi_app=debug)
        #[arg(long)]
        set_log: Option<String>,

        /// Reset configuration to defaults
        #[arg(long)]
        reset: bool,
    },
}

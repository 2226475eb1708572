use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for worklog
/// Rebuilds a monthly attendance ledger from Slack attendance threads
#[derive(Parser)]
#[command(
    name = "worklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Monthly attendance ledger rebuilt from Slack threads, with working-hours totals",
    long_about = None
)]
pub struct Cli {
    /// Override cache database path (useful for tests or a custom location)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Log progress to stderr (RUST_LOG takes precedence)
    #[arg(global = true, long = "verbose", short = 'v')]
    pub verbose: bool,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the local cache
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration (token masked)")]
        print_config: bool,
    },

    /// Print the internal operation log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,

        #[arg(long, default_value_t = 50, help = "Maximum number of rows")]
        limit: usize,
    },

    /// Rebuild the ledger of a month from Slack (or the mock source) and cache it
    Fetch {
        /// Month (YYYY-MM); defaults to the current month
        month: Option<String>,

        /// Do not write the result to the local cache
        #[arg(long = "no-cache")]
        no_cache: bool,
    },

    /// Print a cached ledger
    Show {
        /// Month (YYYY-MM); defaults to the current month
        month: Option<String>,
    },

    /// List the months available in the local cache (newest first)
    Months,

    /// Edit the break duration of one day in a cached ledger
    Break {
        /// Month (YYYY-MM)
        month: String,

        /// Day of month (1-based)
        #[arg(long)]
        day: usize,

        /// New break duration (H:MM or HH:MM)
        value: String,
    },

    /// Export a cached ledger
    Export {
        /// Month (YYYY-MM)
        month: String,

        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

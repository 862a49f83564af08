//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use podium::OutputFormat;

#[derive(Parser)]
#[command(name = "podium", version)]
#[command(about = "Tie-aware rankings over per-date user scores")]
pub struct Cli {
    /// Config file (TOML); missing file falls back to defaults
    #[arg(short, long, default_value = "podium.toml", global = true)]
    pub config: PathBuf,

    /// SQLite database with a `scores` table (overrides config)
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// JSON file of score rows to query instead of SQLite
    #[arg(long, global = true, conflicts_with = "database")]
    pub scores: Option<PathBuf>,

    /// Output format: text or json (overrides config)
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Dates with at least N score entries, newest first
    Dates {
        #[arg(long, allow_hyphen_values = true)]
        min_count: String,
    },
    /// Users holding the top score on a date
    TopUsers {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,
    },
    /// Dates on which a user ranked within the top N (ties at the boundary count)
    UserDates {
        #[arg(long)]
        user: String,
        #[arg(long, allow_hyphen_values = true)]
        top: String,
    },
    /// Run a query from a signed request token
    Request {
        /// Token of the form <signature>.<payload> in url-safe base64
        #[arg(long)]
        token: String,
        /// Caller secret checked against the configured api_secret
        #[arg(long, env = "PODIUM_API_SECRET", hide_env_values = true)]
        secret: String,
    },
}

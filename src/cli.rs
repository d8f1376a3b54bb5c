//! Command-line arguments.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::selection::Selection;

#[derive(Debug, Parser)]
#[command(author, version, about = "Residential solar savings dashboard")]
pub struct Args {
    /// TOML configuration file; built-in constants are used when omitted.
    #[clap(long, env = "SOLAR_SAVINGS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the dashboard over HTTP (default).
    #[cfg(feature = "api")]
    Serve(ServeArgs),

    /// Print the projection summary and optionally export it as CSV.
    Report(ReportArgs),

    /// Interactive terminal dashboard.
    #[cfg(feature = "tui")]
    Tui,
}

#[derive(Debug, Default, Parser)]
pub struct ServeArgs {
    /// Address to bind; defaults to `dashboard.bind` from the configuration.
    #[clap(long, env = "SOLAR_SAVINGS_BIND")]
    pub bind: Option<SocketAddr>,
}

#[derive(Debug, Parser)]
pub struct ReportArgs {
    /// Comma-separated measure ids; the configured default when omitted.
    #[clap(long)]
    pub select: Option<String>,

    /// Write the per-year projection to this CSV file.
    #[clap(long)]
    pub export: Option<PathBuf>,
}

impl ReportArgs {
    /// The selection to report on, falling back to `default`.
    pub fn selection(&self, default: &Selection) -> Selection {
        self.select
            .as_deref()
            .map_or_else(|| default.clone(), Selection::parse_list)
    }
}

//! CLI interface for home-risk
//!
//! Provides subcommands for:
//! - `analyze`: Run a Monte Carlo risk assessment for an offer
//! - `regions`: List regions in the price index dataset
//! - `stats`: Show historical statistics for a region
//! - `config`: Show the effective configuration

mod analyze;
mod regions;
mod stats;

pub use analyze::AnalyzeArgs;
pub use regions::RegionsArgs;
pub use stats::StatsArgs;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "home-risk")]
#[command(about = "Monte Carlo risk assessment for home purchase offers")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a risk assessment for an offer
    Analyze(AnalyzeArgs),
    /// List regions in the dataset
    Regions(RegionsArgs),
    /// Show historical statistics for a region
    Stats(StatsArgs),
    /// Show configuration
    Config,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

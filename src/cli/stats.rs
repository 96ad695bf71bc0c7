//! Stats command implementation

use super::OutputFormat;
use crate::config::Config;
use crate::data::SeriesStore;
use crate::engine::RiskEngine;
use clap::Args;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Region identifier (ZIP code)
    #[arg(long)]
    pub region: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl StatsArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let engine = RiskEngine::new(SeriesStore::load(&config.data.path)?);
        let profile = engine.region_profile(&self.region)?;

        match self.format {
            OutputFormat::Table => println!("{}", profile.format_table()),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&profile)?),
        }
        Ok(())
    }
}

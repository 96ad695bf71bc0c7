//! Analyze command implementation

use super::OutputFormat;
use crate::config::Config;
use crate::data::SeriesStore;
use crate::engine::{AnalysisReport, RiskEngine, SimulationParameters};
use clap::Args;
use rust_decimal::Decimal;
use std::time::Duration;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Region identifier (ZIP code)
    #[arg(long)]
    pub region: String,

    /// Current market price of the property
    #[arg(long)]
    pub current_price: Decimal,

    /// Offer price
    #[arg(long)]
    pub offer_price: Decimal,

    /// Down payment as a fraction of the offer (0-1)
    #[arg(long, default_value = "0.20")]
    pub down_payment: Decimal,

    /// Gross annual income
    #[arg(long)]
    pub income: Decimal,

    /// Holding horizon in years (1-30)
    #[arg(long, default_value = "5")]
    pub horizon: u32,

    /// Risk tolerance (0 = averse, 1 = tolerant)
    #[arg(long, default_value = "0.5")]
    pub risk_tolerance: Decimal,

    /// Number of simulated paths (defaults to configuration)
    #[arg(long)]
    pub simulations: Option<usize>,

    /// Random seed for a reproducible run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl AnalyzeArgs {
    /// Build engine parameters, falling back to the configured simulation count
    pub fn parameters(&self, config: &Config) -> SimulationParameters {
        SimulationParameters {
            region: self.region.clone(),
            current_price: self.current_price,
            offer_price: self.offer_price,
            down_payment_fraction: self.down_payment,
            annual_income: self.income,
            horizon_years: self.horizon,
            risk_tolerance: self.risk_tolerance,
            num_simulations: self
                .simulations
                .unwrap_or(config.simulation.num_simulations),
        }
    }

    /// Run the assessment on a blocking worker under the configured timeout
    pub async fn run(&self, config: &Config) -> anyhow::Result<AnalysisReport> {
        let params = self.parameters(config);
        let seed = self.seed.or(config.simulation.seed);
        let path = config.data.path.clone();
        let timeout = Duration::from_secs(config.simulation.timeout_secs);

        let task = tokio::task::spawn_blocking(move || -> anyhow::Result<AnalysisReport> {
            let engine = RiskEngine::new(SeriesStore::load(&path)?);
            Ok(engine.assess_seeded(&params, seed)?)
        });

        let report = tokio::time::timeout(timeout, task)
            .await
            .map_err(|_| anyhow::anyhow!("Assessment timed out after {}s", timeout.as_secs()))???;

        Ok(report)
    }

    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        tracing::info!(region = %self.region, "Running risk assessment...");
        let report = self.run(config).await?;

        match self.format {
            OutputFormat::Table => println!("{}", report.format_table()),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }
        Ok(())
    }
}

//! Analysis reports and CLI rendering

use super::SimulationParameters;
use crate::model::{ReturnStatistics, TrendSummary};
use crate::risk::{ConfidenceBreakdown, SimulationResult};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal_macros::dec;
use serde::Serialize;
use uuid::Uuid;

/// Full record of one risk assessment
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Unique identifier of this run
    pub run_id: Uuid,
    /// Normalized region identifier
    pub region: String,
    pub generated_at: DateTime<Utc>,
    pub parameters: SimulationParameters,
    /// Seed used for the random source, when one was fixed
    pub seed: Option<u64>,
    /// Historical return statistics of the region index
    pub statistics: ReturnStatistics,
    /// Latest index value used as the regional reference price
    pub reference_price: f64,
    /// Monthly volatility after calibration
    pub calibrated_sigma: f64,
    pub overpay_ratio: f64,
    pub confidence: ConfidenceBreakdown,
    pub result: SimulationResult,
    pub elapsed_ms: u64,
}

impl AnalysisReport {
    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        let r = &self.result;
        let c = &self.confidence;
        format!(
            r#"
══════════════════════════════════════════════════════
               RISK ASSESSMENT: REGION {}
══════════════════════════════════════════════════════

OFFER
───────────────────────────────────────────────────────
Offer Price:        {:.2}
Current Price:      {:.2}
Fair Value Band:    {} – {}
Horizon:            {} years ({} simulations)

OUTCOMES
───────────────────────────────────────────────────────
P10 / P50 / P90:    {} / {} / {}
Prob. Downside:     {:.2}%
Prob. Underwater:   {:.2}%
Fragility:          {} (sigma {:.4})

CONFIDENCE
───────────────────────────────────────────────────────
Score:              {:.2}%
Simulated:          {:.2}%
Overpay Penalty:    -{:.2}%
Affordability:      -{:.2}%
Tolerance Adj.:     -{:.2}%
══════════════════════════════════════════════════════
"#,
            self.region,
            self.parameters.offer_price,
            self.parameters.current_price,
            r.fair_value_low,
            r.fair_value_high,
            self.parameters.horizon_years,
            self.parameters.num_simulations,
            r.p10,
            r.p50,
            r.p90,
            r.prob_downside * dec!(100),
            r.prob_underwater * dec!(100),
            r.fragility_index,
            self.calibrated_sigma,
            r.confidence_score * dec!(100),
            c.sim_confidence * 100.0,
            c.overpay_penalty * 100.0,
            c.affordability_penalty * 100.0,
            c.tolerance_adjustment * 100.0,
        )
    }
}

/// Historical profile of a region's price index
#[derive(Debug, Clone, Serialize)]
pub struct RegionProfile {
    pub region: String,
    /// Number of valid monthly observations
    pub observations: usize,
    pub first_month: NaiveDate,
    pub latest_month: NaiveDate,
    /// Latest index value
    pub reference_price: f64,
    pub statistics: ReturnStatistics,
    pub trend: TrendSummary,
}

impl RegionProfile {
    /// Format as table for CLI output
    pub fn format_table(&self) -> String {
        let pct = |v: Option<f64>| match v {
            Some(v) => format!("{:+.2}%", v * 100.0),
            None => "n/a".to_string(),
        };
        format!(
            r#"
REGION {}
───────────────────────────────────────────────────────
History:            {} months ({} – {})
Reference Price:    {:.2}
Mean Monthly Ret.:  {:+.4}%
Monthly Vol.:       {:.4}%

TREND
───────────────────────────────────────────────────────
3m / 6m / 12m:      {} / {} / {}
3y CAGR:            {}
12m Volatility:     {}
Momentum Accel.:    {}
"#,
            self.region,
            self.observations,
            self.first_month,
            self.latest_month,
            self.reference_price,
            self.statistics.mean_monthly_return * 100.0,
            self.statistics.monthly_volatility * 100.0,
            pct(self.trend.growth_3m),
            pct(self.trend.growth_6m),
            pct(self.trend.growth_12m),
            pct(self.trend.cagr_3y),
            pct(self.trend.volatility_12m),
            pct(self.trend.momentum_accel),
        )
    }
}

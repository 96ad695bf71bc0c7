//! Risk assessment result types

use crate::model::ModelError;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse label summarizing calibrated monthly volatility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FragilityLabel {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl FragilityLabel {
    /// Classify a calibrated monthly volatility
    pub fn from_sigma(sigma: f64) -> Self {
        if sigma < 0.025 {
            FragilityLabel::Low
        } else if sigma < 0.04 {
            FragilityLabel::Moderate
        } else if sigma < 0.06 {
            FragilityLabel::High
        } else {
            FragilityLabel::VeryHigh
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FragilityLabel::Low => "Low",
            FragilityLabel::Moderate => "Moderate",
            FragilityLabel::High => "High",
            FragilityLabel::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for FragilityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one risk simulation.
///
/// Probabilities carry 4 decimal places, monetary values 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Composite confidence in the purchase, within [0.05, 0.97]
    pub confidence_score: Decimal,
    /// Share of outcomes below the current price
    pub prob_downside: Decimal,
    /// Share of outcomes below the offer price
    pub prob_underwater: Decimal,
    /// 10th percentile terminal price
    pub p10: Decimal,
    /// Median terminal price
    pub p50: Decimal,
    /// 90th percentile terminal price
    pub p90: Decimal,
    /// Bottom of the fair-value band
    pub fair_value_low: Decimal,
    /// Top of the fair-value band
    pub fair_value_high: Decimal,
    /// Volatility label
    pub fragility_index: FragilityLabel,
}

fn to_decimal(value: f64, dp: u32) -> Result<Decimal, ModelError> {
    Decimal::from_f64(value)
        .map(|d| d.round_dp(dp))
        .ok_or(ModelError::Unrepresentable(value))
}

/// Convert to a probability with 4 decimal places
pub(crate) fn probability(value: f64) -> Result<Decimal, ModelError> {
    to_decimal(value, 4)
}

/// Convert to a monetary amount with 2 decimal places
pub(crate) fn money(value: f64) -> Result<Decimal, ModelError> {
    to_decimal(value, 2)
}

//! Risk metrics over simulated terminal prices

use super::types::{money, probability};
use super::{FragilityLabel, SimulationResult};
use crate::model::{FairValueBand, ModelError};
use serde::Serialize;

/// Percentile of an ascending-sorted sample using linear interpolation between
/// closest ranks: rank `h = (n - 1) * q / 100`, value
/// `x[floor(h)] + (h - floor(h)) * (x[floor(h) + 1] - x[floor(h)])`.
pub fn percentile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=100.0).contains(&q) {
        return None;
    }

    let rank = (sorted.len() - 1) as f64 * q / 100.0;
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    let fraction = rank - lower as f64;

    Some(sorted[lower] + fraction * (sorted[upper] - sorted[lower]))
}

/// Fraction of samples satisfying a predicate
fn fraction(samples: &[f64], predicate: impl Fn(f64) -> bool) -> f64 {
    samples.iter().filter(|&&s| predicate(s)).count() as f64 / samples.len() as f64
}

/// Weights of the composite confidence score
#[derive(Debug, Clone)]
pub struct ConfidenceWeights {
    /// Penalty per unit of overpay ratio
    pub overpay_multiplier: f64,
    /// Maximum overpay penalty
    pub overpay_cap: f64,
    /// Weight on the affordability penalty
    pub affordability_weight: f64,
    /// Weight on (1 - risk tolerance)
    pub tolerance_weight: f64,
    /// Lowest reported score
    pub floor: f64,
    /// Highest reported score
    pub ceiling: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            overpay_multiplier: 1.5,
            overpay_cap: 0.35,
            affordability_weight: 0.15,
            tolerance_weight: 0.08,
            floor: 0.05,
            ceiling: 0.97,
        }
    }
}

/// Components of the confidence score
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfidenceBreakdown {
    /// Share of outcomes at or above the offer price
    pub sim_confidence: f64,
    pub overpay_penalty: f64,
    /// Weighted affordability penalty
    pub affordability_penalty: f64,
    pub tolerance_adjustment: f64,
    /// Score before clamping
    pub raw: f64,
    /// Clamped score
    pub score: f64,
}

/// Everything the aggregator needs from one simulation run
#[derive(Debug, Clone)]
pub struct AggregateInputs<'a> {
    pub terminal_prices: &'a [f64],
    pub current_price: f64,
    pub offer_price: f64,
    pub fair_value: FairValueBand,
    pub overpay_ratio: f64,
    /// Unweighted affordability penalty in [0, 1]
    pub affordability_penalty: f64,
    pub risk_tolerance: f64,
    pub calibrated_sigma: f64,
}

/// Aggregated metrics with the confidence components that produced them
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSummary {
    pub result: SimulationResult,
    pub confidence: ConfidenceBreakdown,
}

/// Derives percentiles, probabilities and the composite confidence score
#[derive(Debug, Clone, Default)]
pub struct RiskAggregator {
    pub weights: ConfidenceWeights,
}

impl RiskAggregator {
    /// Create an aggregator with the standard weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Compose the confidence score from its components
    pub fn confidence(
        &self,
        sim_confidence: f64,
        overpay_ratio: f64,
        affordability_penalty: f64,
        risk_tolerance: f64,
    ) -> ConfidenceBreakdown {
        let w = &self.weights;

        let overpay_penalty = (overpay_ratio * w.overpay_multiplier).min(w.overpay_cap);
        let affordability_penalty = affordability_penalty * w.affordability_weight;
        let tolerance_adjustment = (1.0 - risk_tolerance) * w.tolerance_weight;

        let raw = sim_confidence - overpay_penalty - affordability_penalty - tolerance_adjustment;

        ConfidenceBreakdown {
            sim_confidence,
            overpay_penalty,
            affordability_penalty,
            tolerance_adjustment,
            raw,
            score: raw.clamp(w.floor, w.ceiling),
        }
    }

    /// Aggregate terminal prices into the reported result
    pub fn aggregate(&self, inputs: &AggregateInputs<'_>) -> Result<RiskSummary, ModelError> {
        if inputs.terminal_prices.is_empty() {
            return Err(ModelError::InvalidParameter(
                "no terminal prices to aggregate".to_string(),
            ));
        }
        if let Some(bad) = inputs.terminal_prices.iter().find(|p| !p.is_finite()) {
            return Err(ModelError::InvalidParameter(format!(
                "terminal prices must be finite, got {}",
                bad
            )));
        }

        let mut sorted = inputs.terminal_prices.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        let quantile = |q: f64| percentile(&sorted, q).unwrap_or_default();
        let (p10, p50, p90) = (quantile(10.0), quantile(50.0), quantile(90.0));

        let prices = inputs.terminal_prices;
        let prob_downside = fraction(prices, |p| p < inputs.current_price);
        let prob_underwater = fraction(prices, |p| p < inputs.offer_price);
        let sim_confidence = fraction(prices, |p| p >= inputs.offer_price);

        let confidence = self.confidence(
            sim_confidence,
            inputs.overpay_ratio,
            inputs.affordability_penalty,
            inputs.risk_tolerance,
        );

        let result = SimulationResult {
            confidence_score: probability(confidence.score)?,
            prob_downside: probability(prob_downside)?,
            prob_underwater: probability(prob_underwater)?,
            p10: money(p10)?,
            p50: money(p50)?,
            p90: money(p90)?,
            fair_value_low: money(inputs.fair_value.low)?,
            fair_value_high: money(inputs.fair_value.high)?,
            fragility_index: FragilityLabel::from_sigma(inputs.calibrated_sigma),
        };

        Ok(RiskSummary { result, confidence })
    }
}

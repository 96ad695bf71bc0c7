//! Trailing trend summary of a price series

use super::returns::{monthly_returns, sample_std_dev};
use serde::Serialize;

/// Trailing growth and volatility measured at the latest month
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TrendSummary {
    /// Growth over the last 3 months
    pub growth_3m: Option<f64>,
    /// Growth over the last 6 months
    pub growth_6m: Option<f64>,
    /// Growth over the last 12 months
    pub growth_12m: Option<f64>,
    /// Annualized growth over the last 36 months
    pub cagr_3y: Option<f64>,
    /// Sample volatility of the last 12 monthly returns
    pub volatility_12m: Option<f64>,
    /// `growth_3m - growth_6m`
    pub momentum_accel: Option<f64>,
}

impl TrendSummary {
    /// Summarize a chronological value series; metrics lacking history are `None`
    pub fn from_values(values: &[f64]) -> Self {
        let growth_3m = trailing_growth(values, 3);
        let growth_6m = trailing_growth(values, 6);

        let cagr_3y = trailing_growth(values, 36).map(|g| (1.0 + g).powf(12.0 / 36.0) - 1.0);

        let volatility_12m = if values.len() > 12 {
            let returns = monthly_returns(&values[values.len() - 13..]);
            sample_std_dev(&returns)
        } else {
            None
        };

        Self {
            growth_3m,
            growth_6m,
            growth_12m: trailing_growth(values, 12),
            cagr_3y,
            volatility_12m,
            momentum_accel: growth_3m.zip(growth_6m).map(|(g3, g6)| g3 - g6),
        }
    }
}

/// `v[last] / v[last - months] - 1`
fn trailing_growth(values: &[f64], months: usize) -> Option<f64> {
    if values.len() <= months {
        return None;
    }
    let latest = values[values.len() - 1];
    let base = values[values.len() - 1 - months];
    (base > 0.0).then(|| latest / base - 1.0)
}

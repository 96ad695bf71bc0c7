//! Monthly return statistics

use super::ReturnStatistics;

/// Simple monthly returns `v[t] / v[t-1] - 1`
pub fn monthly_returns(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// Sample standard deviation (n-1 denominator). `None` for fewer than two samples.
pub fn sample_std_dev(samples: &[f64]) -> Option<f64> {
    if samples.len() < 2 {
        return None;
    }
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    let variance = samples.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some(variance.sqrt())
}

/// Mean and sample volatility of monthly returns for a value series.
///
/// Needs at least two returns (three values) for the sample volatility to be defined.
pub fn compute_monthly_stats(values: &[f64]) -> Option<ReturnStatistics> {
    let returns = monthly_returns(values);
    let monthly_volatility = sample_std_dev(&returns)?;
    let mean_monthly_return = returns.iter().sum::<f64>() / returns.len() as f64;

    Some(ReturnStatistics {
        mean_monthly_return,
        monthly_volatility,
    })
}

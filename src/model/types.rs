//! Model types

use serde::Serialize;
use thiserror::Error;

/// Mean and volatility of monthly simple returns
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReturnStatistics {
    /// Arithmetic mean of monthly returns
    pub mean_monthly_return: f64,
    /// Sample (n-1) standard deviation of monthly returns
    pub monthly_volatility: f64,
}

/// Errors from the simulation model
#[derive(Debug, Error)]
pub enum ModelError {
    /// A model input is outside its domain
    #[error("Invalid model parameter: {0}")]
    InvalidParameter(String),
    /// Sampling distribution could not be constructed
    #[error("Distribution error: {0}")]
    Distribution(String),
    /// A result value cannot be reported as a decimal
    #[error("Value {0} is outside the reportable decimal range")]
    Unrepresentable(f64),
}

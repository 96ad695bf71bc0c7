//! Risk metrics module
//!
//! Affordability scoring, percentile aggregation and the composite confidence score

mod affordability;
mod metrics;
mod types;

pub use affordability::{
    AffordabilityModel, MORTGAGE_RATE, SAFE_DTI_RATIO, STRESSED_DTI_RATIO, UNKNOWN_INCOME_PENALTY,
};
pub use self::metrics::{
    percentile, AggregateInputs, ConfidenceBreakdown, ConfidenceWeights, RiskAggregator,
    RiskSummary,
};
pub use types::{FragilityLabel, SimulationResult};

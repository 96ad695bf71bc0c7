//! Price model module
//!
//! Return statistics, volatility calibration, fair-value band and the
//! fat-tailed Monte Carlo path simulator

mod fair_value;
mod paths;
mod returns;
mod trend;
mod types;
mod volatility;

pub use fair_value::{round_cents, FairValueBand, FAIR_VALUE_HIGH_FACTOR, FAIR_VALUE_LOW_FACTOR};
pub use paths::{
    PathParams, PathSimulator, CORRECTION_FACTOR_RANGE, CORRECTION_PROBABILITY,
    DEGREES_OF_FREEDOM, REVERSION_FLOOR, REVERSION_RATE,
};
pub use returns::{compute_monthly_stats, monthly_returns, sample_std_dev};
pub use trend::TrendSummary;
pub use types::{ModelError, ReturnStatistics};
pub use volatility::{VolatilityCalibrator, DEVIATION_SENSITIVITY, INDIVIDUAL_VOL_MULTIPLIER};

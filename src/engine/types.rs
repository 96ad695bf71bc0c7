//! Engine request and error types

use crate::data::DataError;
use crate::model::ModelError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of simulated paths per request
pub const DEFAULT_NUM_SIMULATIONS: usize = 1000;

/// Longest supported holding horizon
pub const MAX_HORIZON_YEARS: u32 = 30;

/// Errors surfaced to callers of the risk engine
#[derive(Debug, Error)]
pub enum EngineError {
    /// Region missing or with too little history
    #[error(transparent)]
    Data(#[from] DataError),
    /// Request parameters outside their domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Simulation model failure
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl EngineError {
    /// Whether the failure is caused by the request rather than the system
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EngineError::InvalidInput(_)
                | EngineError::Data(DataError::NotFound(_))
                | EngineError::Data(DataError::InsufficientData { .. })
        )
    }
}

/// Inputs for one risk assessment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Region identifier (zero-padded to 5 characters on lookup)
    pub region: String,
    /// Current market price of the property
    pub current_price: Decimal,
    /// Price the buyer intends to pay
    pub offer_price: Decimal,
    /// Down payment as a fraction of the offer
    pub down_payment_fraction: Decimal,
    /// Gross annual household income
    pub annual_income: Decimal,
    /// Holding horizon in years
    pub horizon_years: u32,
    /// 0 = risk averse, 1 = risk tolerant
    pub risk_tolerance: Decimal,
    /// Number of simulated paths
    pub num_simulations: usize,
}

impl SimulationParameters {
    /// Number of monthly simulation steps
    pub fn horizon_months(&self) -> usize {
        self.horizon_years as usize * 12
    }

    /// Check every parameter is within its domain
    pub fn validate(&self) -> Result<(), EngineError> {
        let invalid = |msg: String| Err(EngineError::InvalidInput(msg));

        if self.region.trim().is_empty() {
            return invalid("region must not be empty".to_string());
        }
        if self.current_price <= dec!(0) {
            return invalid(format!("current_price must be positive, got {}", self.current_price));
        }
        if self.offer_price <= dec!(0) {
            return invalid(format!("offer_price must be positive, got {}", self.offer_price));
        }
        if self.down_payment_fraction < dec!(0) || self.down_payment_fraction > dec!(1) {
            return invalid(format!(
                "down_payment_fraction must be within [0, 1], got {}",
                self.down_payment_fraction
            ));
        }
        if self.annual_income <= dec!(0) {
            return invalid(format!("annual_income must be positive, got {}", self.annual_income));
        }
        if !(1..=MAX_HORIZON_YEARS).contains(&self.horizon_years) {
            return invalid(format!(
                "horizon_years must be within [1, {}], got {}",
                MAX_HORIZON_YEARS, self.horizon_years
            ));
        }
        if self.risk_tolerance < dec!(0) || self.risk_tolerance > dec!(1) {
            return invalid(format!(
                "risk_tolerance must be within [0, 1], got {}",
                self.risk_tolerance
            ));
        }
        if self.num_simulations == 0 {
            return invalid("num_simulations must be positive".to_string());
        }
        Ok(())
    }
}

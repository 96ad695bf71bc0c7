//! Volatility calibration
//!
//! Index-level volatility understates single-home variance, and homes priced away
//! from the regional reference carry extra uncertainty.

/// Scale from smoothed index volatility to individual-home volatility
pub const INDIVIDUAL_VOL_MULTIPLIER: f64 = 2.5;

/// Extra volatility per unit of relative deviation from the reference price
pub const DEVIATION_SENSITIVITY: f64 = 0.7;

/// Calibrates monthly index volatility for a specific property
#[derive(Debug, Clone)]
pub struct VolatilityCalibrator {
    /// Multiplier applied to index volatility
    pub individual_multiplier: f64,
    /// Sensitivity to price deviation from the reference
    pub deviation_sensitivity: f64,
}

impl VolatilityCalibrator {
    /// Create a calibrator with the standard multipliers
    pub fn new() -> Self {
        Self {
            individual_multiplier: INDIVIDUAL_VOL_MULTIPLIER,
            deviation_sensitivity: DEVIATION_SENSITIVITY,
        }
    }

    /// `1 + sensitivity * |current / reference - 1|`.
    /// A non-positive reference means no adjustment.
    pub fn deviation_adjustment(&self, current_price: f64, reference_price: f64) -> f64 {
        let ratio = if reference_price > 0.0 {
            current_price / reference_price
        } else {
            1.0
        };
        1.0 + self.deviation_sensitivity * (ratio - 1.0).abs()
    }

    /// Calibrated monthly volatility for a property at `current_price`
    pub fn calibrate(&self, base_sigma: f64, current_price: f64, reference_price: f64) -> f64 {
        base_sigma
            * self.deviation_adjustment(current_price, reference_price)
            * self.individual_multiplier
    }
}

impl Default for VolatilityCalibrator {
    fn default() -> Self {
        Self::new()
    }
}

//! Fat-tailed price path simulation
//!
//! Monthly returns are `mu + sigma * t` with `t` a Student-t(5) variate, compounded
//! from the offer price. Each path may take a one-time market correction, and all
//! paths are dragged down when the offer sits above the fair-value band.

use super::ModelError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StudentT};
use rayon::prelude::*;

/// Degrees of freedom of the monthly return distribution
pub const DEGREES_OF_FREEDOM: f64 = 5.0;

/// Chance a simulated path experiences a market correction
pub const CORRECTION_PROBABILITY: f64 = 0.15;

/// Range of the multiplicative correction factor (8-20% drawdown)
pub const CORRECTION_FACTOR_RANGE: (f64, f64) = (0.80, 0.92);

/// Drag per unit of overpay ratio
pub const REVERSION_RATE: f64 = 0.35;

/// Lowest allowed mean-reversion multiplier
pub const REVERSION_FLOOR: f64 = 0.70;

/// Inputs for one batch of simulated paths
#[derive(Debug, Clone)]
pub struct PathParams {
    /// Mean monthly return
    pub mu: f64,
    /// Calibrated monthly volatility
    pub sigma: f64,
    /// Price paths compound from
    pub offer_price: f64,
    /// Number of monthly steps per path
    pub horizon_months: usize,
    /// Number of independent paths
    pub num_simulations: usize,
    /// Relative excess of the offer above the fair-value band
    pub overpay_ratio: f64,
}

/// Monte Carlo terminal price simulator
#[derive(Debug, Clone)]
pub struct PathSimulator {
    /// Student-t degrees of freedom
    pub degrees_of_freedom: f64,
    /// Per-path correction probability
    pub correction_probability: f64,
    /// Correction factor bounds (low, high)
    pub correction_range: (f64, f64),
    /// Mean-reversion rate per unit of overpay
    pub reversion_rate: f64,
    /// Floor on the mean-reversion multiplier
    pub reversion_floor: f64,
}

impl PathSimulator {
    /// Create a simulator with the standard shock and reversion settings
    pub fn new() -> Self {
        Self {
            degrees_of_freedom: DEGREES_OF_FREEDOM,
            correction_probability: CORRECTION_PROBABILITY,
            correction_range: CORRECTION_FACTOR_RANGE,
            reversion_rate: REVERSION_RATE,
            reversion_floor: REVERSION_FLOOR,
        }
    }

    /// Override the correction probability
    pub fn with_correction_probability(mut self, probability: f64) -> Self {
        self.correction_probability = probability;
        self
    }

    /// Multiplier applied to every terminal price for a given overpay ratio
    pub fn reversion_drag(&self, overpay_ratio: f64) -> f64 {
        if overpay_ratio <= 0.0 {
            return 1.0;
        }
        (1.0 - self.reversion_rate * overpay_ratio).max(self.reversion_floor)
    }

    /// Simulate `num_simulations` terminal prices.
    ///
    /// One seed per path is drawn from `rng` up front, so the output depends only
    /// on the state of `rng` and not on how paths are scheduled across threads.
    pub fn simulate<R: Rng + ?Sized>(
        &self,
        params: &PathParams,
        rng: &mut R,
    ) -> Result<Vec<f64>, ModelError> {
        self.validate(params)?;

        let t_dist = StudentT::new(self.degrees_of_freedom)
            .map_err(|e| ModelError::Distribution(e.to_string()))?;
        let drag = self.reversion_drag(params.overpay_ratio);

        let seeds: Vec<u64> = (0..params.num_simulations).map(|_| rng.gen()).collect();

        let terminal = seeds
            .into_par_iter()
            .map(|seed| {
                let mut path_rng = StdRng::seed_from_u64(seed);
                self.simulate_path(params, &t_dist, &mut path_rng) * drag
            })
            .collect();

        Ok(terminal)
    }

    fn simulate_path(&self, params: &PathParams, t_dist: &StudentT<f64>, rng: &mut StdRng) -> f64 {
        let mut growth = 1.0;
        for _ in 0..params.horizon_months {
            let t: f64 = t_dist.sample(rng);
            growth *= 1.0 + params.mu + params.sigma * t;
        }

        let mut terminal = params.offer_price * growth;

        if rng.gen_bool(self.correction_probability) {
            let (low, high) = self.correction_range;
            terminal *= rng.gen_range(low..=high);
        }

        terminal
    }

    fn validate(&self, params: &PathParams) -> Result<(), ModelError> {
        if params.num_simulations == 0 {
            return Err(ModelError::InvalidParameter(
                "num_simulations must be positive".to_string(),
            ));
        }
        if params.horizon_months == 0 {
            return Err(ModelError::InvalidParameter(
                "horizon must be at least one month".to_string(),
            ));
        }
        if !(params.offer_price.is_finite() && params.offer_price > 0.0) {
            return Err(ModelError::InvalidParameter(format!(
                "offer price must be positive, got {}",
                params.offer_price
            )));
        }
        if !params.mu.is_finite() || !params.sigma.is_finite() || params.sigma < 0.0 {
            return Err(ModelError::InvalidParameter(format!(
                "return parameters must be finite with non-negative sigma (mu={}, sigma={})",
                params.mu, params.sigma
            )));
        }
        if !(0.0..=1.0).contains(&self.correction_probability) {
            return Err(ModelError::InvalidParameter(format!(
                "correction probability {} outside [0, 1]",
                self.correction_probability
            )));
        }
        Ok(())
    }
}

impl Default for PathSimulator {
    fn default() -> Self {
        Self::new()
    }
}

//! Debt-to-income affordability penalty

/// Flat annual mortgage cost as a fraction of the loan
pub const MORTGAGE_RATE: f64 = 0.065;

/// Front-end DTI at or below which there is no penalty
pub const SAFE_DTI_RATIO: f64 = 0.28;

/// DTI at or above which the penalty is maximal
pub const STRESSED_DTI_RATIO: f64 = 0.36;

/// Penalty used when income is unknown or non-positive
pub const UNKNOWN_INCOME_PENALTY: f64 = 0.5;

/// Scores how stretched a buyer is by the mortgage on an offer
#[derive(Debug, Clone)]
pub struct AffordabilityModel {
    /// Flat annual payment rate on the loan
    pub mortgage_rate: f64,
    /// Comfortable DTI ceiling
    pub safe_dti: f64,
    /// Severely stretched DTI floor
    pub stressed_dti: f64,
}

impl AffordabilityModel {
    /// Create a model with the standard 28%/36% DTI guidelines
    pub fn new() -> Self {
        Self {
            mortgage_rate: MORTGAGE_RATE,
            safe_dti: SAFE_DTI_RATIO,
            stressed_dti: STRESSED_DTI_RATIO,
        }
    }

    /// Annual payment over income. `None` when income is non-positive.
    pub fn debt_to_income(&self, offer_price: f64, down_payment: f64, income: f64) -> Option<f64> {
        if income <= 0.0 {
            return None;
        }
        let loan = offer_price * (1.0 - down_payment);
        let annual_payment = loan * self.mortgage_rate;
        Some(annual_payment / income)
    }

    /// Penalty in [0, 1]: 0 is comfortable, 1 is severely stretched
    pub fn penalty(&self, offer_price: f64, down_payment: f64, income: f64) -> f64 {
        let Some(dti) = self.debt_to_income(offer_price, down_payment, income) else {
            return UNKNOWN_INCOME_PENALTY;
        };

        if dti <= self.safe_dti {
            0.0
        } else if dti >= self.stressed_dti {
            1.0
        } else {
            (dti - self.safe_dti) / (self.stressed_dti - self.safe_dti)
        }
    }
}

impl Default for AffordabilityModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comfortable_buyer() {
        let model = AffordabilityModel::new();
        // 416k loan * 6.5% = 27,040 / 150k = 18% DTI
        assert_eq!(model.penalty(520000.0, 0.20, 150000.0), 0.0);
    }

    #[test]
    fn test_stressed_buyer() {
        let model = AffordabilityModel::new();
        // 800k loan * 6.5% = 52k / 100k = 52% DTI
        assert_eq!(model.penalty(1000000.0, 0.20, 100000.0), 1.0);
    }

    #[test]
    fn test_interpolates_between_thresholds() {
        let model = AffordabilityModel::new();
        // 500k loan * 6.5% = 32.5k / 100k = 32.5% DTI
        let penalty = model.penalty(500000.0, 0.0, 100000.0);
        assert!((penalty - 0.5625).abs() < 1e-9);
    }

    #[test]
    fn test_threshold_edges() {
        let model = AffordabilityModel::new();
        // DTI exactly 0.28 and 0.36
        assert!(model.penalty(280000.0, 0.0, 65000.0) < 1e-9);
        assert!(model.penalty(360000.0, 0.0, 65000.0) > 1.0 - 1e-9);
    }

    #[test]
    fn test_non_positive_income_defaults() {
        let model = AffordabilityModel::new();
        assert_eq!(model.penalty(500000.0, 0.2, 0.0), 0.5);
        assert_eq!(model.penalty(500000.0, 0.2, -10.0), 0.5);
        assert!(model.debt_to_income(500000.0, 0.2, 0.0).is_none());
    }

    #[test]
    fn test_full_down_payment() {
        let model = AffordabilityModel::new();
        assert_eq!(model.penalty(500000.0, 1.0, 50000.0), 0.0);
    }
}

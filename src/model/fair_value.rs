//! Fair-value band around a regional reference price

use serde::Serialize;

/// Lower edge of the band as a fraction of the reference price
pub const FAIR_VALUE_LOW_FACTOR: f64 = 0.90;

/// Upper edge of the band as a fraction of the reference price
pub const FAIR_VALUE_HIGH_FACTOR: f64 = 1.10;

/// Round to cents
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Valuation window around a region's reference price
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FairValueBand {
    /// Bottom of the band, in cents precision
    pub low: f64,
    /// Top of the band, in cents precision
    pub high: f64,
}

impl FairValueBand {
    /// Band of +/-10% around the reference price
    pub fn around(reference_price: f64) -> Self {
        Self {
            low: round_cents(reference_price * FAIR_VALUE_LOW_FACTOR),
            high: round_cents(reference_price * FAIR_VALUE_HIGH_FACTOR),
        }
    }

    /// Relative excess of `offer_price` above the top of the band (0 when at or below)
    pub fn overpay_ratio(&self, offer_price: f64) -> f64 {
        if self.high <= 0.0 || offer_price <= self.high {
            return 0.0;
        }
        (offer_price - self.high) / self.high
    }
}

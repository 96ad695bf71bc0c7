//! Historical series module
//!
//! Loads the wide-format monthly price index table and answers per-region queries

mod loader;
mod store;
mod types;

pub use loader::{read_table, REGION_COLUMN};
pub use store::{LazySeriesStore, SeriesStore};
pub use types::DataError;

use chrono::{Months, NaiveDate};
use serde::Serialize;
use std::sync::Arc;

/// Minimum valid monthly observations before return statistics are meaningful
pub const MIN_OBSERVATIONS: usize = 12;

/// Width region identifiers are zero-padded to
pub const REGION_ID_WIDTH: usize = 5;

/// Normalize a region identifier to its fixed-width, zero-padded form
pub fn normalize_region(region: &str) -> String {
    format!("{:0>width$}", region.trim(), width = REGION_ID_WIDTH)
}

/// A single monthly index value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Observation {
    /// Month the value is labelled with
    pub month: NaiveDate,
    /// Index value for that month
    pub value: f64,
}

/// Ordered monthly price index history for one region
#[derive(Debug, Clone, Serialize)]
pub struct PriceSeries {
    region: String,
    observations: Vec<Observation>,
}

impl PriceSeries {
    /// Build a series, dropping missing or non-positive values and ordering by month
    pub fn new(region: &str, observations: Vec<Observation>) -> Self {
        let mut observations: Vec<Observation> = observations
            .into_iter()
            .filter(|o| o.value.is_finite() && o.value > 0.0)
            .collect();
        observations.sort_by_key(|o| o.month);

        Self {
            region: normalize_region(region),
            observations,
        }
    }

    /// Build a series of consecutive months starting at `start`.
    /// NaN entries are treated as missing months.
    pub fn from_values(region: &str, start: NaiveDate, values: &[f64]) -> Self {
        let observations = values
            .iter()
            .enumerate()
            .filter_map(|(i, &value)| {
                start
                    .checked_add_months(Months::new(i as u32))
                    .map(|month| Observation { month, value })
            })
            .collect();
        Self::new(region, observations)
    }

    /// Normalized region identifier
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Valid observations in chronological order
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Raw values in chronological order
    pub fn values(&self) -> Vec<f64> {
        self.observations.iter().map(|o| o.value).collect()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Most recent valid observation
    pub fn latest(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Fail with `InsufficientData` unless the minimum history is present
    pub fn ensure_sufficient(&self) -> Result<(), DataError> {
        if self.observations.len() < MIN_OBSERVATIONS {
            return Err(DataError::InsufficientData {
                region: self.region.clone(),
                observations: self.observations.len(),
                required: MIN_OBSERVATIONS,
            });
        }
        Ok(())
    }
}

/// Source of validated per-region price history
pub trait SeriesSource: Send + Sync {
    /// Series for a region with at least `MIN_OBSERVATIONS` valid months
    fn series(&self, region: &str) -> Result<Arc<PriceSeries>, DataError>;

    /// All region identifiers known to the source, sorted
    fn available_regions(&self) -> Result<Vec<String>, DataError>;

    /// Latest valid value for a region, used as its reference price
    fn latest_value(&self, region: &str) -> Result<f64, DataError> {
        let series = self.series(region)?;
        series
            .latest()
            .map(|o| o.value)
            .ok_or_else(|| DataError::InsufficientData {
                region: series.region().to_string(),
                observations: 0,
                required: MIN_OBSERVATIONS,
            })
    }
}

impl<T: SeriesSource + ?Sized> SeriesSource for Arc<T> {
    fn series(&self, region: &str) -> Result<Arc<PriceSeries>, DataError> {
        (**self).series(region)
    }

    fn available_regions(&self) -> Result<Vec<String>, DataError> {
        (**self).available_regions()
    }

    fn latest_value(&self, region: &str) -> Result<f64, DataError> {
        (**self).latest_value(region)
    }
}

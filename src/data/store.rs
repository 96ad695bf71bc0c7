//! In-memory region index over the price table

use super::{normalize_region, read_table, DataError, PriceSeries, SeriesSource};
use crate::telemetry::{self, GaugeMetric};
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Immutable index from region identifier to its price history
#[derive(Debug, Default)]
pub struct SeriesStore {
    series: HashMap<String, Arc<PriceSeries>>,
}

impl SeriesStore {
    /// Parse a dataset file and build the region index
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let store = Self::from_series(read_table(path)?);

        tracing::info!(
            path = ?path,
            regions = store.len(),
            "Loaded price index dataset"
        );
        telemetry::set_gauge(GaugeMetric::DatasetRegions, store.len() as f64);

        Ok(store)
    }

    /// Build a store from already-parsed series. The first row for a region wins.
    pub fn from_series(rows: impl IntoIterator<Item = PriceSeries>) -> Self {
        let mut series = HashMap::new();
        for row in rows {
            if series.contains_key(row.region()) {
                tracing::warn!(region = row.region(), "Duplicate region row ignored");
                continue;
            }
            series.insert(row.region().to_string(), Arc::new(row));
        }
        Self { series }
    }

    /// Number of regions indexed
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}

impl SeriesSource for SeriesStore {
    fn series(&self, region: &str) -> Result<Arc<PriceSeries>, DataError> {
        let key = normalize_region(region);
        let series = self
            .series
            .get(&key)
            .ok_or_else(|| DataError::NotFound(key.clone()))?;
        series.ensure_sufficient()?;
        Ok(Arc::clone(series))
    }

    fn available_regions(&self) -> Result<Vec<String>, DataError> {
        let mut regions: Vec<String> = self.series.keys().cloned().collect();
        regions.sort();
        Ok(regions)
    }
}

/// Store that loads its dataset on first use, at most once per instance.
///
/// Concurrent first callers block on the same initialization; a failed load
/// is reported to the caller and attempted again on the next access.
#[derive(Debug)]
pub struct LazySeriesStore {
    path: PathBuf,
    cell: OnceCell<Arc<SeriesStore>>,
}

impl LazySeriesStore {
    /// Create a lazy store for the dataset at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cell: OnceCell::new(),
        }
    }

    /// Get the loaded store, loading it if this is the first access
    pub fn get(&self) -> Result<&Arc<SeriesStore>, DataError> {
        self.cell
            .get_or_try_init(|| SeriesStore::load(&self.path).map(Arc::new))
    }

    /// Whether the dataset has been loaded
    pub fn is_loaded(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Dataset path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeriesSource for LazySeriesStore {
    fn series(&self, region: &str) -> Result<Arc<PriceSeries>, DataError> {
        self.get()?.series(region)
    }

    fn available_regions(&self) -> Result<Vec<String>, DataError> {
        self.get()?.available_regions()
    }
}

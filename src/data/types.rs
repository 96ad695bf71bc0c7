//! Historical data errors

use thiserror::Error;

/// Errors raised while loading or querying the price index dataset
#[derive(Debug, Error)]
pub enum DataError {
    /// Region identifier is not present in the dataset
    #[error("Region {0} not found in price index data")]
    NotFound(String),
    /// Region has too few valid monthly observations
    #[error("Insufficient data for region {region} ({observations} months, need {required})")]
    InsufficientData {
        region: String,
        observations: usize,
        required: usize,
    },
    /// Dataset file could not be read
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
    /// Dataset contents could not be decoded
    #[error("Failed to decode dataset: {0}")]
    Decode(String),
    /// Dataset file extension is not csv or parquet
    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),
    /// Required column is absent from the dataset header
    #[error("Dataset has no {0} column")]
    MissingColumn(String),
}

impl From<arrow::error::ArrowError> for DataError {
    fn from(err: arrow::error::ArrowError) -> Self {
        DataError::Decode(err.to_string())
    }
}

impl From<parquet::errors::ParquetError> for DataError {
    fn from(err: parquet::errors::ParquetError) -> Self {
        DataError::Decode(err.to_string())
    }
}

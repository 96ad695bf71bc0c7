//! Wide-format price index reader (CSV and Parquet)

use super::{DataError, Observation, PriceSeries};
use arrow::array::{Array, AsArray, Float64Array};
use arrow::compute::cast;
use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::datatypes::{DataType, Field, Float64Type, Schema};
use arrow::record_batch::RecordBatch;
use chrono::NaiveDate;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::fs::File;
use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

/// Column holding the region identifier
pub const REGION_COLUMN: &str = "RegionName";

/// Read every region row of a dataset file into price series.
///
/// Date columns are those whose header parses as `YYYY-MM-DD` (or `YYYY-MM`);
/// all other columns besides [`REGION_COLUMN`] are metadata and ignored.
pub fn read_table(path: impl AsRef<Path>) -> Result<Vec<PriceSeries>, DataError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let batches = match extension.as_deref() {
        Some("csv") => read_csv_batches(path)?,
        Some("parquet") => read_parquet_batches(path)?,
        other => {
            return Err(DataError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            ))
        }
    };

    let mut series = Vec::new();
    for batch in &batches {
        series.extend(series_from_batch(batch)?);
    }

    tracing::debug!(path = ?path, rows = series.len(), "Read price index table");
    Ok(series)
}

fn read_csv_batches(path: &Path) -> Result<Vec<RecordBatch>, DataError> {
    let mut file = File::open(path)?;

    let (inferred, _) = Format::default()
        .with_header(true)
        .infer_schema(&mut file, Some(1))?;
    file.rewind()?;

    // Everything is read as text; numeric parsing happens per column so stray
    // non-numeric cells become gaps rather than decode failures.
    let fields: Vec<Field> = inferred
        .fields()
        .iter()
        .map(|f| Field::new(f.name(), DataType::Utf8, true))
        .collect();

    let reader = ReaderBuilder::new(Arc::new(Schema::new(fields)))
        .with_header(true)
        .build(file)?;

    Ok(reader.collect::<Result<Vec<_>, _>>()?)
}

fn read_parquet_batches(path: &Path) -> Result<Vec<RecordBatch>, DataError> {
    let file = File::open(path)?;
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)?.build()?;
    Ok(reader.collect::<Result<Vec<_>, _>>()?)
}

/// Parse a date column header into its month
fn parse_month(header: &str) -> Option<NaiveDate> {
    let header = header.trim();
    NaiveDate::parse_from_str(header, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{header}-01"), "%Y-%m-%d"))
        .ok()
}

fn series_from_batch(batch: &RecordBatch) -> Result<Vec<PriceSeries>, DataError> {
    let schema = batch.schema();
    let region_idx = schema
        .index_of(REGION_COLUMN)
        .map_err(|_| DataError::MissingColumn(REGION_COLUMN.to_string()))?;

    let regions = cast(batch.column(region_idx).as_ref(), &DataType::Utf8)?;
    let regions = regions.as_string::<i32>();

    let mut date_columns: Vec<(NaiveDate, Float64Array)> = Vec::new();
    for (idx, field) in schema.fields().iter().enumerate() {
        if idx == region_idx {
            continue;
        }
        if let Some(month) = parse_month(field.name()) {
            let values = cast(batch.column(idx).as_ref(), &DataType::Float64)?;
            date_columns.push((month, values.as_primitive::<Float64Type>().clone()));
        }
    }
    date_columns.sort_by_key(|(month, _)| *month);

    let mut series = Vec::with_capacity(batch.num_rows());
    for row in 0..batch.num_rows() {
        if regions.is_null(row) || regions.value(row).trim().is_empty() {
            tracing::warn!(row, "Skipping row without region identifier");
            continue;
        }

        let observations = date_columns
            .iter()
            .filter(|(_, values)| !values.is_null(row))
            .map(|(month, values)| Observation {
                month: *month,
                value: values.value(row),
            })
            .collect();

        series.push(PriceSeries::new(regions.value(row), observations));
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{ArrayRef, Int64Array};
    use parquet::arrow::ArrowWriter;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("2000-01-31"),
            NaiveDate::from_ymd_opt(2000, 1, 31)
        );
        assert_eq!(parse_month("2024-05"), NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(parse_month("SizeRank"), None);
        assert_eq!(parse_month("RegionName"), None);
    }

    #[test]
    fn test_read_csv_table() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "zhvi.csv",
            "RegionID,SizeRank,RegionName,State,2000-01-31,2000-02-29,2000-03-31\n\
             1,0,92617,CA,500000,,510000\n\
             2,1,2134,MA,300000,301000,n/a\n",
        );

        let table = read_table(&path).unwrap();
        assert_eq!(table.len(), 2);

        assert_eq!(table[0].region(), "92617");
        assert_eq!(table[0].values(), vec![500000.0, 510000.0]);

        assert_eq!(table[1].region(), "02134");
        assert_eq!(table[1].values(), vec![300000.0, 301000.0]);
    }

    #[test]
    fn test_read_csv_orders_columns_by_date() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "zhvi.csv",
            "RegionName,2000-03-31,2000-01-31,2000-02-29\n92617,3,1,2\n",
        );

        let table = read_table(&path).unwrap();
        assert_eq!(table[0].values(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_missing_region_column() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "zhvi.csv", "Zip,2000-01-31\n92617,1\n");

        let result = read_table(&path);
        assert!(matches!(result, Err(DataError::MissingColumn(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "zhvi.xlsx", "");

        let result = read_table(&path);
        assert!(matches!(result, Err(DataError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = read_table("/nonexistent/zhvi.csv");
        assert!(matches!(result, Err(DataError::Io(_))));
    }

    #[test]
    fn test_read_parquet_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("zhvi.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new("RegionName", DataType::Int64, false),
            Field::new("2000-01-31", DataType::Float64, true),
            Field::new("2000-02-29", DataType::Float64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Int64Array::from(vec![92617, 501])) as ArrayRef,
                Arc::new(Float64Array::from(vec![Some(500000.0), None])) as ArrayRef,
                Arc::new(Float64Array::from(vec![Some(505000.0), Some(90000.0)])) as ArrayRef,
            ],
        )
        .unwrap();

        let file = File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let table = read_table(&path).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table[0].region(), "92617");
        assert_eq!(table[0].values(), vec![500000.0, 505000.0]);
        assert_eq!(table[1].region(), "00501");
        assert_eq!(table[1].values(), vec![90000.0]);
    }
}

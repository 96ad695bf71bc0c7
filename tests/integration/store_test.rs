//! Integration tests for the historical series store

use super::{rising_values, write_dataset};
use home_risk::data::{DataError, LazySeriesStore, SeriesSource, SeriesStore};
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_load_csv_dataset() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(
        dir.path(),
        &[
            ("92617", rising_values()),
            ("2134", vec![300000.0; 12]),
            ("501", vec![100000.0; 11]),
        ],
    );

    let store = SeriesStore::load(&path).unwrap();
    assert_eq!(store.len(), 3);
    assert_eq!(
        store.available_regions().unwrap(),
        vec!["00501", "02134", "92617"]
    );

    assert_eq!(store.series("92617").unwrap().len(), 24);
    assert!((store.latest_value("92617").unwrap() - 560000.0).abs() < 1e-6);
    assert_eq!(store.series("02134").unwrap().len(), 12);
    assert!(matches!(
        store.series("00501"),
        Err(DataError::InsufficientData { observations: 11, .. })
    ));
    assert!(matches!(store.series("11111"), Err(DataError::NotFound(_))));
}

#[test]
fn test_missing_months_are_excluded() {
    let dir = TempDir::new().unwrap();
    let mut values = vec![400000.0; 14];
    values[3] = f64::NAN;
    values[7] = f64::NAN;
    values[13] = f64::NAN;
    let path = write_dataset(dir.path(), &[("92617", values)]);

    let store = SeriesStore::load(&path).unwrap();
    // 14 months minus 3 gaps leaves 11: below the minimum
    assert!(matches!(
        store.series("92617"),
        Err(DataError::InsufficientData { observations: 11, .. })
    ));
}

#[test]
fn test_shared_lazy_store() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(dir.path(), &[("92617", rising_values())]);

    let lazy = Arc::new(LazySeriesStore::new(&path));
    let workers: Vec<_> = (0..4)
        .map(|_| {
            let lazy = Arc::clone(&lazy);
            std::thread::spawn(move || lazy.latest_value("92617").unwrap())
        })
        .collect();

    for worker in workers {
        assert!((worker.join().unwrap() - 560000.0).abs() < 1e-6);
    }
    assert!(lazy.is_loaded());
}

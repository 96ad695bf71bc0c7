//! Integration tests

mod cli_test;
mod e2e_test;
mod store_test;

use std::io::Write;
use std::path::{Path, PathBuf};

/// Write a wide-format CSV with one row per `(region, values)` starting January 2020
pub fn write_dataset(dir: &Path, rows: &[(&str, Vec<f64>)]) -> PathBuf {
    let months = rows.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
    let header: Vec<String> = (0..months)
        .map(|i| format!("{}-{:02}-01", 2020 + i / 12, i % 12 + 1))
        .collect();

    let path = dir.join("zhvi.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "RegionID,SizeRank,RegionName,State,{}", header.join(",")).unwrap();

    for (idx, (region, values)) in rows.iter().enumerate() {
        let cells: Vec<String> = (0..months)
            .map(|i| match values.get(i) {
                Some(v) if v.is_finite() => v.to_string(),
                _ => String::new(),
            })
            .collect();
        writeln!(file, "{},{},{},CA,{}", 1000 + idx, idx, region, cells.join(",")).unwrap();
    }

    path
}

/// 24 months rising linearly from 500,000 to 560,000
pub fn rising_values() -> Vec<f64> {
    (0..24)
        .map(|i| 500000.0 + 60000.0 * i as f64 / 23.0)
        .collect()
}

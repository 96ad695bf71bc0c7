//! Integration tests for CLI commands

use super::{rising_values, write_dataset};
use home_risk::cli::{AnalyzeArgs, OutputFormat};
use home_risk::config::Config;
use rust_decimal_macros::dec;
use tempfile::TempDir;

fn args() -> AnalyzeArgs {
    AnalyzeArgs {
        region: "92617".to_string(),
        current_price: dec!(520000),
        offer_price: dec!(520000),
        down_payment: dec!(0.20),
        income: dec!(150000),
        horizon: 5,
        risk_tolerance: dec!(0.5),
        simulations: Some(500),
        seed: Some(42),
        format: OutputFormat::Json,
    }
}

fn config_for(path: std::path::PathBuf) -> Config {
    let mut config = Config::default();
    config.data.path = path;
    config
}

#[test]
fn test_analyze_run() {
    let dir = TempDir::new().unwrap();
    let config = config_for(write_dataset(dir.path(), &[("92617", rising_values())]));

    let report = tokio_test::block_on(args().run(&config)).unwrap();
    assert_eq!(report.parameters.num_simulations, 500);
    assert_eq!(report.seed, Some(42));

    let again = tokio_test::block_on(args().run(&config)).unwrap();
    assert_eq!(report.result, again.result);
}

#[test]
fn test_analyze_uses_configured_simulations() {
    let mut config = Config::default();
    config.simulation.num_simulations = 321;

    let params = AnalyzeArgs {
        simulations: None,
        ..args()
    }
    .parameters(&config);
    assert_eq!(params.num_simulations, 321);
}

#[test]
fn test_analyze_missing_dataset() {
    let config = config_for("/nonexistent/zhvi.csv".into());
    let result = tokio_test::block_on(args().run(&config));
    assert!(result.is_err());
}

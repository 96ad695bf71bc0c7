//! End-to-end integration tests

use super::{rising_values, write_dataset};
use home_risk::config::Config;
use home_risk::data::{LazySeriesStore, SeriesStore};
use home_risk::engine::{EngineError, RiskEngine, SimulationParameters};
use home_risk::risk::FragilityLabel;
use rust_decimal_macros::dec;
use tempfile::TempDir;

fn scenario() -> SimulationParameters {
    SimulationParameters {
        region: "92617".to_string(),
        current_price: dec!(520000),
        offer_price: dec!(520000),
        down_payment_fraction: dec!(0.20),
        annual_income: dec!(150000),
        horizon_years: 5,
        risk_tolerance: dec!(0.5),
        num_simulations: 1000,
    }
}

#[test]
fn test_config_example_exists() {
    let config = Config::from_toml(include_str!("../../config.toml.example")).unwrap();
    assert_eq!(config.simulation.num_simulations, 1000);
}

#[test]
fn test_assessment_from_csv() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(dir.path(), &[("92617", rising_values())]);

    let engine = RiskEngine::new(SeriesStore::load(&path).unwrap());
    let report = engine.assess_seeded(&scenario(), Some(42)).unwrap();
    let result = &report.result;

    assert!(result.p10 <= result.p50 && result.p50 <= result.p90);
    assert!(result.p50 > dec!(500000) && result.p50 < dec!(750000));
    assert!(result.confidence_score >= dec!(0.05) && result.confidence_score <= dec!(0.97));
    assert_eq!(result.fragility_index, FragilityLabel::Low);
    assert_eq!(result.fair_value_high, dec!(616000));
}

#[test]
fn test_result_json_contract() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(dir.path(), &[("92617", rising_values())]);

    let engine = RiskEngine::new(LazySeriesStore::new(&path));
    let result = engine.assess_seeded(&scenario(), Some(1)).unwrap().result;
    let json = serde_json::to_value(&result).unwrap();

    for field in [
        "confidence_score",
        "prob_downside",
        "prob_underwater",
        "p10",
        "p50",
        "p90",
        "fair_value_low",
        "fair_value_high",
        "fragility_index",
    ] {
        assert!(json.get(field).is_some(), "missing {field}");
    }
    assert_eq!(json["fragility_index"], "Low");
}

#[test]
fn test_unknown_region_is_client_error() {
    let dir = TempDir::new().unwrap();
    let path = write_dataset(dir.path(), &[("92617", rising_values())]);

    let engine = RiskEngine::new(SeriesStore::load(&path).unwrap());
    let params = SimulationParameters {
        region: "00000".to_string(),
        ..scenario()
    };

    let err = engine.assess_seeded(&params, None).unwrap_err();
    assert!(matches!(err, EngineError::Data(_)));
    assert!(err.is_client_error());
}

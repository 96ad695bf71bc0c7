//! Configuration types for home-risk

use crate::engine::DEFAULT_NUM_SIMULATIONS;
use crate::telemetry::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable overriding the dataset path
pub const ENV_DATA_PATH: &str = "ZHVI_CSV_PATH";

/// Environment variable overriding the simulation count
pub const ENV_NUM_SIMULATIONS: &str = "MC_NUM_SIMULATIONS";

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Historical dataset configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataConfig {
    /// CSV or Parquet price index file
    #[serde(default = "default_data_path")]
    pub path: PathBuf,
}

fn default_data_path() -> PathBuf {
    PathBuf::from("data/zhvi.csv")
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: default_data_path(),
        }
    }
}

/// Monte Carlo configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Paths simulated per assessment
    #[serde(default = "default_num_simulations")]
    pub num_simulations: usize,

    /// Fixed seed for reproducible runs
    #[serde(default)]
    pub seed: Option<u64>,

    /// Overall time budget for one assessment (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_num_simulations() -> usize {
    DEFAULT_NUM_SIMULATIONS
}
fn default_timeout_secs() -> u64 {
    30
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_simulations: DEFAULT_NUM_SIMULATIONS,
            seed: None,
            timeout_secs: 30,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Prometheus scrape port; no exporter when unset
    #[serde(default)]
    pub metrics_port: Option<u16>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::Pretty,
            metrics_port: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `ZHVI_CSV_PATH` and `MC_NUM_SIMULATIONS` from the process environment
    pub fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<()> {
        if let Some(path) = lookup(ENV_DATA_PATH) {
            self.data.path = PathBuf::from(path);
        }
        if let Some(count) = lookup(ENV_NUM_SIMULATIONS) {
            self.simulation.num_simulations = count.trim().parse().map_err(|e| {
                anyhow::anyhow!("Invalid {}={:?}: {}", ENV_NUM_SIMULATIONS, count, e)
            })?;
        }
        self.validate()
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.simulation.num_simulations == 0 {
            anyhow::bail!("simulation.num_simulations must be positive");
        }
        if self.simulation.timeout_secs == 0 {
            anyhow::bail!("simulation.timeout_secs must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            [data]
            path = "/srv/zhvi.parquet"

            [simulation]
            num_simulations = 5000
            seed = 42
            timeout_secs = 10

            [telemetry]
            log_level = "debug"
            log_format = "json"
            metrics_port = 9090
        "#;

        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.data.path, PathBuf::from("/srv/zhvi.parquet"));
        assert_eq!(config.simulation.num_simulations, 5000);
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.telemetry.log_format, LogFormat::Json);
        assert_eq!(config.telemetry.metrics_port, Some(9090));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.data.path, PathBuf::from("data/zhvi.csv"));
        assert_eq!(config.simulation.num_simulations, 1000);
        assert_eq!(config.simulation.seed, None);
        assert_eq!(config.simulation.timeout_secs, 30);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.telemetry.log_format, LogFormat::Pretty);
        assert!(config.telemetry.metrics_port.is_none());
    }

    #[test]
    fn test_partial_section_defaults() {
        let config = Config::from_toml("[simulation]\nseed = 7\n").unwrap();
        assert_eq!(config.simulation.seed, Some(7));
        assert_eq!(config.simulation.num_simulations, 1000);
    }

    #[test]
    fn test_zero_simulations_rejected() {
        let result = Config::from_toml("[simulation]\nnum_simulations = 0\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            (ENV_DATA_PATH, "/tmp/other.csv"),
            (ENV_NUM_SIMULATIONS, " 250 "),
        ]);

        let mut config = Config::default();
        config
            .apply_overrides(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.data.path, PathBuf::from("/tmp/other.csv"));
        assert_eq!(config.simulation.num_simulations, 250);
    }

    #[test]
    fn test_invalid_env_override() {
        let mut config = Config::default();
        let result = config.apply_overrides(|key| {
            (key == ENV_NUM_SIMULATIONS).then(|| "many".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_config_load_nonexistent() {
        let result = Config::load("/nonexistent/path/config.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_example_config_parses() {
        let config = Config::from_toml(include_str!("../config.toml.example")).unwrap();
        assert_eq!(config.simulation.num_simulations, 1000);
    }
}

//! home-risk: Monte Carlo risk assessment for home purchase offers
//!
//! This library provides the core components for:
//! - Loading a wide-format monthly home price index (CSV or Parquet)
//! - Return statistics and volatility calibration per region
//! - Fat-tailed price path simulation with correction shocks and mean reversion
//! - Percentile, downside and composite confidence metrics
//! - Affordability scoring from debt-to-income
//! - CLI and observability stack

pub mod cli;
pub mod config;
pub mod data;
pub mod engine;
pub mod model;
pub mod risk;
pub mod telemetry;

//! Risk engine
//!
//! Runs one assessment end to end: series lookup, return statistics, volatility
//! calibration, path simulation and metric aggregation

mod report;
mod types;

pub use report::{AnalysisReport, RegionProfile};
pub use types::{EngineError, SimulationParameters, DEFAULT_NUM_SIMULATIONS, MAX_HORIZON_YEARS};

use crate::data::{DataError, SeriesSource, MIN_OBSERVATIONS};
use crate::model::{
    compute_monthly_stats, FairValueBand, PathParams, PathSimulator, ReturnStatistics,
    TrendSummary, VolatilityCalibrator,
};
use crate::risk::{AffordabilityModel, AggregateInputs, RiskAggregator, SimulationResult};
use crate::telemetry::{self, CounterMetric, LatencyMetric};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::time::Instant;
use uuid::Uuid;

fn to_f64(value: Decimal) -> f64 {
    value.try_into().unwrap_or(0.0)
}

/// Home purchase risk engine over an injected price history source
pub struct RiskEngine<S> {
    source: S,
    calibrator: VolatilityCalibrator,
    simulator: PathSimulator,
    affordability: AffordabilityModel,
    aggregator: RiskAggregator,
}

impl<S: SeriesSource> RiskEngine<S> {
    /// Create an engine with the standard model settings
    pub fn new(source: S) -> Self {
        Self {
            source,
            calibrator: VolatilityCalibrator::new(),
            simulator: PathSimulator::new(),
            affordability: AffordabilityModel::new(),
            aggregator: RiskAggregator::new(),
        }
    }

    /// Replace the path simulator
    pub fn with_simulator(mut self, simulator: PathSimulator) -> Self {
        self.simulator = simulator;
        self
    }

    /// Underlying price history source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Run an assessment, returning only the result contract
    pub fn run<R: Rng + ?Sized>(
        &self,
        params: &SimulationParameters,
        rng: &mut R,
    ) -> Result<SimulationResult, EngineError> {
        Ok(self.assess(params, rng)?.result)
    }

    /// Run an assessment with a fixed seed, or from entropy when `seed` is `None`
    pub fn assess_seeded(
        &self,
        params: &SimulationParameters,
        seed: Option<u64>,
    ) -> Result<AnalysisReport, EngineError> {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let mut report = self.assess(params, &mut rng)?;
        report.seed = seed;
        Ok(report)
    }

    /// Run a full assessment with the given random source
    pub fn assess<R: Rng + ?Sized>(
        &self,
        params: &SimulationParameters,
        rng: &mut R,
    ) -> Result<AnalysisReport, EngineError> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("assess", %run_id, region = %params.region);
        let _enter = span.enter();

        let started = Instant::now();
        let outcome = self.assess_inner(run_id, params, rng, started);

        match &outcome {
            Ok(report) => {
                let elapsed = started.elapsed();
                telemetry::record_latency(LatencyMetric::Simulation, elapsed);
                telemetry::increment_counter(CounterMetric::Simulations);
                tracing::info!(
                    sims = params.num_simulations,
                    confidence = %report.result.confidence_score,
                    p50 = %report.result.p50,
                    fragility = %report.result.fragility_index,
                    elapsed_ms = elapsed.as_millis() as u64,
                    "Assessment complete"
                );
            }
            Err(e) => {
                telemetry::increment_counter(CounterMetric::EngineErrors);
                tracing::warn!(error = %e, client_error = e.is_client_error(), "Assessment failed");
            }
        }

        outcome
    }

    fn assess_inner<R: Rng + ?Sized>(
        &self,
        run_id: Uuid,
        params: &SimulationParameters,
        rng: &mut R,
        started: Instant,
    ) -> Result<AnalysisReport, EngineError> {
        params.validate()?;

        let series = self.source.series(&params.region)?;
        let statistics = self.statistics(&series.values(), series.region())?;
        let reference_price = self.source.latest_value(&params.region)?;

        let current_price = to_f64(params.current_price);
        let offer_price = to_f64(params.offer_price);
        let down_payment = to_f64(params.down_payment_fraction);
        let income = to_f64(params.annual_income);
        let risk_tolerance = to_f64(params.risk_tolerance);

        let calibrated_sigma = self.calibrator.calibrate(
            statistics.monthly_volatility,
            current_price,
            reference_price,
        );
        let fair_value = FairValueBand::around(reference_price);
        let overpay_ratio = fair_value.overpay_ratio(offer_price);

        tracing::debug!(
            mu = statistics.mean_monthly_return,
            base_sigma = statistics.monthly_volatility,
            calibrated_sigma,
            reference_price,
            overpay_ratio,
            "Calibrated simulation inputs"
        );

        let terminal_prices = self.simulator.simulate(
            &PathParams {
                mu: statistics.mean_monthly_return,
                sigma: calibrated_sigma,
                offer_price,
                horizon_months: params.horizon_months(),
                num_simulations: params.num_simulations,
                overpay_ratio,
            },
            rng,
        )?;

        let affordability_penalty = self.affordability.penalty(offer_price, down_payment, income);

        let summary = self.aggregator.aggregate(&AggregateInputs {
            terminal_prices: &terminal_prices,
            current_price,
            offer_price,
            fair_value,
            overpay_ratio,
            affordability_penalty,
            risk_tolerance,
            calibrated_sigma,
        })?;

        Ok(AnalysisReport {
            run_id,
            region: series.region().to_string(),
            generated_at: Utc::now(),
            parameters: params.clone(),
            seed: None,
            statistics,
            reference_price,
            calibrated_sigma,
            overpay_ratio,
            confidence: summary.confidence,
            result: summary.result,
            elapsed_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// Historical profile of a region: return statistics, reference price and trend
    pub fn region_profile(&self, region: &str) -> Result<RegionProfile, EngineError> {
        let series = self.source.series(region)?;
        let values = series.values();
        let statistics = self.statistics(&values, series.region())?;

        let (first, latest) = match (series.observations().first(), series.latest()) {
            (Some(first), Some(latest)) => (*first, *latest),
            _ => {
                return Err(DataError::InsufficientData {
                    region: series.region().to_string(),
                    observations: 0,
                    required: MIN_OBSERVATIONS,
                }
                .into())
            }
        };

        Ok(RegionProfile {
            region: series.region().to_string(),
            observations: series.len(),
            first_month: first.month,
            latest_month: latest.month,
            reference_price: latest.value,
            statistics,
            trend: TrendSummary::from_values(&values),
        })
    }

    fn statistics(&self, values: &[f64], region: &str) -> Result<ReturnStatistics, EngineError> {
        compute_monthly_stats(values).ok_or_else(|| {
            DataError::InsufficientData {
                region: region.to_string(),
                observations: values.len(),
                required: MIN_OBSERVATIONS,
            }
            .into()
        })
    }
}

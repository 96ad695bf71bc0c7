//! Prometheus metrics

use metrics_exporter_prometheus::PrometheusBuilder;
use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// End-to-end risk assessment
    Simulation,
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Completed assessments
    Simulations,
    /// Failed assessments
    EngineErrors,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Regions indexed by the loaded dataset
    DatasetRegions,
}

impl LatencyMetric {
    fn name(self) -> &'static str {
        match self {
            LatencyMetric::Simulation => "homerisk_simulation_latency_ms",
        }
    }
}

impl CounterMetric {
    fn name(self) -> &'static str {
        match self {
            CounterMetric::Simulations => "homerisk_simulations_total",
            CounterMetric::EngineErrors => "homerisk_engine_errors_total",
        }
    }
}

impl GaugeMetric {
    fn name(self) -> &'static str {
        match self {
            GaugeMetric::DatasetRegions => "homerisk_dataset_regions",
        }
    }
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let value_ms = duration.as_secs_f64() * 1000.0;
    metrics::histogram!(metric.name()).record(value_ms);
    tracing::trace!(metric = metric.name(), value_ms, "Recorded latency");
}

/// Increment a counter by one
pub fn increment_counter(metric: CounterMetric) {
    metrics::counter!(metric.name()).increment(1);
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    metrics::gauge!(metric.name()).set(value);
    tracing::trace!(metric = metric.name(), value, "Set gauge");
}

/// Install the Prometheus recorder with an HTTP scrape endpoint on `port`
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(([0, 0, 0, 0], port))
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to install metrics exporter: {}", e))?;

    tracing::info!(port, "Prometheus metrics exporter listening");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_names() {
        assert_eq!(
            LatencyMetric::Simulation.name(),
            "homerisk_simulation_latency_ms"
        );
        assert_eq!(
            CounterMetric::EngineErrors.name(),
            "homerisk_engine_errors_total"
        );
        assert_eq!(GaugeMetric::DatasetRegions.name(), "homerisk_dataset_regions");
    }

    #[test]
    fn test_recording_without_recorder_is_noop() {
        record_latency(LatencyMetric::Simulation, Duration::from_millis(5));
        increment_counter(CounterMetric::Simulations);
        set_gauge(GaugeMetric::DatasetRegions, 3.0);
    }
}

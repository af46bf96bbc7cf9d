//! Default values for configuration types.
//!
//! The section structs keep every field optional so that the merge step
//! can tell "set in the file" apart from "left at default"; these accessor
//! methods supply the documented fallbacks.

use crate::config::types::{MetricsConfig, SimulationConfig};

/// Default refresh interval in seconds (3).
///
/// The original dashboard regenerated its metrics snapshot whenever at
/// least 3 seconds had elapsed since the last update.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 3;

/// Default simulation tick delay in seconds (2).
///
/// One tick advances the simulated flow by exactly one step.
pub const DEFAULT_TICK_DELAY_SECS: u64 = 2;

/// Flow selected when a session context is created.
pub const DEFAULT_FLOW_ID: &str = "flow1";

impl MetricsConfig {
    /// Returns the refresh interval in seconds, defaulting to 3.
    pub fn refresh_interval_secs(&self) -> u64 {
        self.refresh_interval_secs
            .unwrap_or(DEFAULT_REFRESH_INTERVAL_SECS)
    }

    /// Returns the latency jitter half-range in milliseconds, defaulting to 2.0.
    pub fn latency_jitter_ms(&self) -> f64 {
        self.latency_jitter_ms.unwrap_or(2.0)
    }

    /// Returns the fraud-prevention rate jitter half-range, defaulting to 0.5.
    pub fn fraud_rate_jitter(&self) -> f64 {
        self.fraud_rate_jitter.unwrap_or(0.5)
    }

    /// Returns the uptime jitter half-range, defaulting to 0.05.
    pub fn uptime_jitter(&self) -> f64 {
        self.uptime_jitter.unwrap_or(0.05)
    }

    /// Returns the throughput jitter half-range, defaulting to 200.0.
    pub fn throughput_jitter(&self) -> f64 {
        self.throughput_jitter.unwrap_or(200.0)
    }
}

impl SimulationConfig {
    /// Returns the tick delay in seconds, defaulting to 2.
    pub fn tick_delay_secs(&self) -> u64 {
        self.tick_delay_secs.unwrap_or(DEFAULT_TICK_DELAY_SECS)
    }

    /// Returns the default flow id, defaulting to "flow1".
    pub fn default_flow(&self) -> &str {
        self.default_flow.as_deref().unwrap_or(DEFAULT_FLOW_ID)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::types::FlowdeckConfig;

    #[test]
    fn test_metrics_config_defaults() {
        let config = FlowdeckConfig::default();
        assert_eq!(config.metrics.refresh_interval_secs(), 3);
        assert_eq!(config.metrics.latency_jitter_ms(), 2.0);
        assert_eq!(config.metrics.fraud_rate_jitter(), 0.5);
        assert_eq!(config.metrics.uptime_jitter(), 0.05);
        assert_eq!(config.metrics.throughput_jitter(), 200.0);
    }

    #[test]
    fn test_simulation_config_defaults() {
        let config = FlowdeckConfig::default();
        assert_eq!(config.simulation.tick_delay_secs(), 2);
        assert_eq!(config.simulation.default_flow(), "flow1");
    }

    #[test]
    fn test_explicit_values_preserved() {
        let config: FlowdeckConfig = toml::from_str(
            r#"
[metrics]
refresh_interval_secs = 7
throughput_jitter = 0.0

[simulation]
tick_delay_secs = 0
"#,
        )
        .unwrap();
        assert_eq!(config.metrics.refresh_interval_secs(), 7);
        // Explicit zero should be preserved - defaults only apply to missing fields
        assert_eq!(config.metrics.throughput_jitter(), 0.0);
        assert_eq!(config.simulation.tick_delay_secs(), 0);
    }
}

//! Configuration validation.
//!
//! Runs after the config hierarchy has been merged, so it sees the final
//! effective values (including defaults).

use crate::config::types::FlowdeckConfig;
use crate::errors::ConfigError;
use crate::flows::catalog::FlowCatalog;

/// Validate a merged configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` when:
/// - the refresh interval is zero
/// - any jitter half-range is negative or non-finite
/// - the default flow does not exist in the built-in catalog
pub fn validate_config(config: &FlowdeckConfig) -> Result<(), ConfigError> {
    if config.metrics.refresh_interval_secs() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "metrics.refresh_interval_secs must be greater than 0".to_string(),
        });
    }

    let jitters = [
        ("metrics.latency_jitter_ms", config.metrics.latency_jitter_ms()),
        ("metrics.fraud_rate_jitter", config.metrics.fraud_rate_jitter()),
        ("metrics.uptime_jitter", config.metrics.uptime_jitter()),
        (
            "metrics.throughput_jitter",
            config.metrics.throughput_jitter(),
        ),
    ];
    for (name, value) in jitters {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidConfiguration {
                message: format!("{} must be a non-negative finite number, got {}", name, value),
            });
        }
    }

    let catalog = FlowCatalog::builtin();
    let default_flow = config.simulation.default_flow();
    if catalog.get(default_flow).is_none() {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "simulation.default_flow '{}' is not a known flow. Known flows: {}",
                default_flow,
                catalog
                    .flows()
                    .iter()
                    .map(|f| f.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        });
    }

    Ok(())
}

//! Configuration type definitions for flowdeck.
//!
//! These types are serialized/deserialized from TOML config files. Every
//! field is optional in the file; accessor methods on the section structs
//! supply the documented defaults.
//!
//! # Example Configuration
//!
//! ```toml
//! [metrics]
//! refresh_interval_secs = 3
//! latency_jitter_ms = 2.0
//! fraud_rate_jitter = 0.5
//! uptime_jitter = 0.05
//! throughput_jitter = 200.0
//!
//! [simulation]
//! tick_delay_secs = 2
//! default_flow = "flow1"
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// This is the primary configuration structure that gets loaded from:
/// 1. User config: `~/.flowdeck/config.toml`
/// 2. Project config: `./.flowdeck/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FlowdeckConfig {
    /// Metrics refresh and perturbation configuration
    #[serde(default)]
    pub metrics: MetricsConfig,

    /// Flow simulation configuration
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Metrics refresh configuration.
///
/// Controls how often the displayed snapshot is regenerated and how far
/// each perturbed field may drift from its baseline value.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MetricsConfig {
    /// Seconds between snapshot regenerations in watch mode.
    /// Default: 3 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_interval_secs: Option<u64>,

    /// Uniform jitter applied to average latency, in milliseconds.
    /// Default: ±2.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latency_jitter_ms: Option<f64>,

    /// Uniform jitter applied to the fraud-prevention rate, in percentage points.
    /// Default: ±0.5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraud_rate_jitter: Option<f64>,

    /// Uniform jitter applied to system uptime, in percentage points.
    /// Default: ±0.05.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime_jitter: Option<f64>,

    /// Uniform jitter applied to throughput, in transactions per second.
    /// Default: ±200.0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throughput_jitter: Option<f64>,
}

/// Flow simulation configuration.
///
/// Controls the tick cadence and which flow is selected at session start.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SimulationConfig {
    /// Seconds between simulation ticks when the CLI drives a run.
    /// Default: 2 seconds. Zero is allowed for scripted runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_delay_secs: Option<u64>,

    /// Flow selected when a new session context is created.
    /// Default: "flow1". Must name a flow in the built-in catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_flow: Option<String>,
}

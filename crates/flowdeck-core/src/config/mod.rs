//! # Configuration System
//!
//! Hierarchical TOML configuration system for flowdeck.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.flowdeck/config.toml` (global user preferences)
//! 3. **Project config** - `./.flowdeck/config.toml` (project-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.flowdeck/config.toml
//! [metrics]
//! refresh_interval_secs = 3
//! latency_jitter_ms = 2.0
//!
//! [simulation]
//! tick_delay_secs = 2
//! default_flow = "flow1"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use flowdeck_core::config::FlowdeckConfig;
//!
//! // Handle config errors explicitly - don't silently fall back to defaults
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = FlowdeckConfig::load_hierarchy()?;
//!     let interval = config.metrics.refresh_interval_secs();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

// Public API exports
pub use types::{FlowdeckConfig, MetricsConfig, SimulationConfig};
pub use validation::validate_config;

impl FlowdeckConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    ///
    /// See [`validation::validate_config`] for details.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validation::validate_config(self)
    }
}

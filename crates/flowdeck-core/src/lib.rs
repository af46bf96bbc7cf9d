//! flowdeck-core: Core library for the flowdeck demo console
//!
//! This library provides the business logic behind flowdeck, a
//! demonstration front end for a fictitious seller-risk MLOps
//! platform. Every metric and event is synthetically generated;
//! nothing here trains, deploys, or detects anything real.
//!
//! # Main Entry Points
//!
//! - [`flows`] - Static catalog of deployment flow definitions
//! - [`simulation`] - Deterministic flow simulation state machine
//! - [`metrics`] - Mock platform metrics generator and refresh check
//! - [`state`] - Command/event dispatch over the session context
//! - [`providers`] - Sample data providers for the dashboard surfaces
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod flows;
pub mod logging;
pub mod metrics;
pub mod providers;
pub mod session;
pub mod simulation;
pub mod state;

// Re-export commonly used types at crate root for convenience
pub use config::FlowdeckConfig;
pub use flows::FlowError;
pub use flows::catalog::FlowCatalog;
pub use flows::types::{FlowDefinition, FlowStats, StepDefinition, StepStatus};
pub use metrics::types::MetricsSnapshot;
pub use providers::types::{
    ActivityEntry, ComponentHealth, Experiment, FeatureImportance, FraudEvent, ModelPerformance,
};
pub use providers::{MockDataProvider, SampleDataProvider};
pub use session::types::{Persona, SessionContext, View};
pub use simulation::types::{SimulationPhase, SimulationState, TickOutcome};
pub use state::{Command, CoreStore, DispatchError, Event, Store};

// Re-export logging initialization
pub use logging::init_logging;

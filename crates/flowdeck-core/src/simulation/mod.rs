//! Deterministic deployment-flow simulation.
//!
//! The simulation is a finite-state machine over `(flow_id, running,
//! step_index)`. All randomness in the application lives in the metrics
//! generator; given a fixed tick source, a simulation run is fully
//! deterministic and replayable.

pub mod engine;
pub mod types;

pub use engine::{pause, phase, progress, reset, select_flow, start, tick};
pub use types::{SimulationPhase, SimulationState, TickOutcome};

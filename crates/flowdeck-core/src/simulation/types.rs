use serde::{Deserialize, Serialize};

/// Live cursor of a flow simulation.
///
/// Invariant: `step_index` is always a valid index into the selected
/// flow's step sequence (`0 <= step_index < step_count`). The transition
/// functions in [`crate::simulation::engine`] preserve this; nothing else
/// mutates the state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationState {
    /// Id of the selected flow. Always present in the catalog.
    pub flow_id: String,
    /// Whether the timer-driven auto-advance is active.
    pub running: bool,
    /// 0-based index of the current step.
    pub step_index: usize,
}

impl SimulationState {
    /// Fresh state for the given flow: not running, cursor at the first step.
    pub fn new(flow_id: impl Into<String>) -> Self {
        Self {
            flow_id: flow_id.into(),
            running: false,
            step_index: 0,
        }
    }
}

/// Derived view of where a simulation stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationPhase {
    /// Not running, cursor anywhere before the last step.
    Idle,
    /// Timer-driven auto-advance is active.
    Running,
    /// Not running and the cursor has reached the last step.
    Completed,
}

/// Result of applying a tick to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The cursor moved forward one step and more steps remain.
    Advanced { step_index: usize },
    /// The cursor reached the last step; `running` was cleared.
    Completed { step_index: usize },
    /// The tick had no effect (not running, or already at the last step).
    Ignored,
}

impl TickOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, TickOutcome::Completed { .. })
    }
}

use serde::{Deserialize, Serialize};

use crate::session::types::{Persona, View};

/// All business state changes that can result from a dispatched command.
///
/// Each variant describes _what happened_, not what should happen. Only
/// successful dispatches produce events; failures use the `Result` error
/// channel (`Err(DispatchError)`), not the event stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A flow was selected and the simulation rewound to its first step.
    FlowSelected { flow_id: String },
    /// The simulation started (or resumed) auto-advancing.
    SimulationStarted { flow_id: String, step_index: usize },
    /// A tick moved the step cursor forward by one.
    SimulationAdvanced { step_index: usize },
    /// The step cursor reached the final step; auto-advance stopped.
    SimulationCompleted { flow_id: String },
    /// Auto-advance was suspended with the cursor in place.
    SimulationPaused { step_index: usize },
    /// The simulation was stopped and rewound to the first step.
    SimulationReset,
    /// A tick arrived while the simulation was not advancing.
    TickIgnored,
    /// The metrics snapshot was replaced with a fresh draw.
    MetricsRefreshed,
    /// The refresh interval had not elapsed; the snapshot was kept.
    MetricsStillFresh,
    /// The active navigation view changed.
    ViewChanged { view: View },
    /// The active persona changed.
    PersonaChanged { persona: Persona },
}

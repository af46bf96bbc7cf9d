use serde::{Deserialize, Serialize};

use crate::session::types::{Persona, View};

/// All business operations that can be dispatched through the store.
///
/// Each variant captures the parameters needed to execute the operation.
/// Commands use owned types so they can be serialized, stored, and sent
/// across boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Select a deployment flow by id, rewinding the simulation.
    SelectFlow { flow_id: String },
    /// Begin (or resume) timer-driven auto-advance of the selected flow.
    StartSimulation,
    /// Suspend auto-advance, keeping the step cursor in place.
    PauseSimulation,
    /// Stop the simulation and rewind to the first step.
    ResetSimulation,
    /// Apply one timer tick to the simulation.
    Tick,
    /// Regenerate the metrics snapshot if the refresh interval has
    /// elapsed. `force` regenerates unconditionally.
    RefreshMetrics { force: bool },
    /// Change the active navigation view.
    SelectView { view: View },
    /// Change the active persona.
    SelectPersona { persona: Persona },
}

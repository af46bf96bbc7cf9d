//! Transition functions for the flow simulation state machine.
//!
//! Every function is a pure state transition over `(&FlowCatalog, &mut
//! SimulationState)`; no timers, no randomness, no I/O. The caller (CLI
//! loop or dispatch layer) owns the tick cadence.
//!
//! # Transitions
//!
//! | Event        | Effect                                                       |
//! |--------------|--------------------------------------------------------------|
//! | `select_flow`| selected flow := id; running := false; step_index := 0       |
//! | `start`      | running := true; index reset to 0 if at/after the last step  |
//! | `pause`      | running := false (step_index unchanged)                      |
//! | `reset`      | running := false; step_index := 0                            |
//! | `tick`       | while running: index += 1, clearing `running` at the last step |

use tracing::debug;

use crate::flows::catalog::FlowCatalog;
use crate::flows::errors::FlowError;
use crate::simulation::types::{SimulationPhase, SimulationState, TickOutcome};

/// Select a flow by id, resetting the cursor.
///
/// # Errors
///
/// Returns `FlowError::UnknownFlow` and leaves the state untouched when
/// the id is not in the catalog. Selection never silently falls back to
/// a default flow.
pub fn select_flow(
    catalog: &FlowCatalog,
    state: &mut SimulationState,
    id: &str,
) -> Result<(), FlowError> {
    if !catalog.contains(id) {
        return Err(FlowError::UnknownFlow { id: id.to_string() });
    }

    state.flow_id = id.to_string();
    state.running = false;
    state.step_index = 0;

    debug!(event = "core.simulation.flow_selected", flow_id = id);
    Ok(())
}

/// Begin (or resume) the timer-driven auto-advance.
///
/// Starting a completed simulation rewinds the cursor to the first step.
pub fn start(catalog: &FlowCatalog, state: &mut SimulationState) {
    if state.step_index >= last_index(catalog, state) {
        state.step_index = 0;
    }
    state.running = true;

    debug!(
        event = "core.simulation.started",
        flow_id = %state.flow_id,
        step_index = state.step_index
    );
}

/// Suspend the auto-advance, keeping the cursor in place.
pub fn pause(state: &mut SimulationState) {
    state.running = false;
    debug!(
        event = "core.simulation.paused",
        flow_id = %state.flow_id,
        step_index = state.step_index
    );
}

/// Stop the simulation and rewind the cursor to the first step.
pub fn reset(state: &mut SimulationState) {
    state.running = false;
    state.step_index = 0;
    debug!(event = "core.simulation.reset", flow_id = %state.flow_id);
}

/// Apply one timer tick.
///
/// Advances the cursor by exactly one step while running. Reaching the
/// last step clears `running` and reports completion. Ticking while
/// paused, or re-ticking at the last step, never moves the cursor;
/// the latter clears `running` so re-entry stays idempotent.
pub fn tick(catalog: &FlowCatalog, state: &mut SimulationState) -> TickOutcome {
    if !state.running {
        return TickOutcome::Ignored;
    }

    let last = last_index(catalog, state);
    if state.step_index >= last {
        state.running = false;
        return TickOutcome::Ignored;
    }

    state.step_index += 1;
    if state.step_index == last {
        state.running = false;
        debug!(
            event = "core.simulation.completed",
            flow_id = %state.flow_id,
            step_index = state.step_index
        );
        TickOutcome::Completed {
            step_index: state.step_index,
        }
    } else {
        debug!(
            event = "core.simulation.advanced",
            flow_id = %state.flow_id,
            step_index = state.step_index
        );
        TickOutcome::Advanced {
            step_index: state.step_index,
        }
    }
}

/// Display progress fraction: `(step_index + 1) / step_count`, in `(0, 1]`.
pub fn progress(catalog: &FlowCatalog, state: &SimulationState) -> f64 {
    let total = step_count(catalog, state);
    (state.step_index + 1) as f64 / total as f64
}

/// Derive the coarse phase of the simulation.
pub fn phase(catalog: &FlowCatalog, state: &SimulationState) -> SimulationPhase {
    if state.running {
        SimulationPhase::Running
    } else if state.step_index == last_index(catalog, state) {
        SimulationPhase::Completed
    } else {
        SimulationPhase::Idle
    }
}

fn step_count(catalog: &FlowCatalog, state: &SimulationState) -> usize {
    catalog
        .get(&state.flow_id)
        .map(|f| f.step_count())
        // The flow_id invariant makes this unreachable; 1 keeps the
        // arithmetic safe if it is ever violated upstream.
        .unwrap_or(1)
}

fn last_index(catalog: &FlowCatalog, state: &SimulationState) -> usize {
    step_count(catalog, state) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (FlowCatalog, SimulationState) {
        let catalog = FlowCatalog::builtin();
        let state = SimulationState::new(catalog.first().id.clone());
        (catalog, state)
    }

    #[test]
    fn test_select_flow_resets_state() {
        let (catalog, mut state) = setup();
        state.running = true;
        state.step_index = 2;

        select_flow(&catalog, &mut state, "flow2").unwrap();

        assert_eq!(state.flow_id, "flow2");
        assert!(!state.running);
        assert_eq!(state.step_index, 0);
    }

    #[test]
    fn test_select_flow_valid_for_all_catalog_ids() {
        let (catalog, mut state) = setup();
        for flow in catalog.flows() {
            select_flow(&catalog, &mut state, &flow.id).unwrap();
            assert_eq!(state.flow_id, flow.id);
            assert!(!state.running);
            assert_eq!(state.step_index, 0);
        }
    }

    #[test]
    fn test_select_unknown_flow_leaves_state_unchanged() {
        let (catalog, mut state) = setup();
        state.running = true;
        state.step_index = 2;
        let before = state.clone();

        let result = select_flow(&catalog, &mut state, "does-not-exist");

        assert!(result.is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn test_start_from_idle() {
        let (catalog, mut state) = setup();
        start(&catalog, &mut state);
        assert!(state.running);
        assert_eq!(state.step_index, 0);
    }

    #[test]
    fn test_start_after_completion_rewinds() {
        let (catalog, mut state) = setup();
        state.step_index = catalog.get("flow1").unwrap().last_index();

        start(&catalog, &mut state);

        assert!(state.running);
        assert_eq!(state.step_index, 0);
    }

    #[test]
    fn test_start_mid_flow_keeps_cursor() {
        let (catalog, mut state) = setup();
        state.step_index = 1;
        start(&catalog, &mut state);
        assert!(state.running);
        assert_eq!(state.step_index, 1);
    }

    #[test]
    fn test_pause_keeps_cursor() {
        let (catalog, mut state) = setup();
        start(&catalog, &mut state);
        tick(&catalog, &mut state);

        pause(&mut state);

        assert!(!state.running);
        assert_eq!(state.step_index, 1);
    }

    #[test]
    fn test_reset_rewinds_and_stops() {
        let (catalog, mut state) = setup();
        start(&catalog, &mut state);
        tick(&catalog, &mut state);

        reset(&mut state);

        assert!(!state.running);
        assert_eq!(state.step_index, 0);
    }

    #[test]
    fn test_tick_ignored_while_paused() {
        let (catalog, mut state) = setup();
        assert_eq!(tick(&catalog, &mut state), TickOutcome::Ignored);
        assert_eq!(state.step_index, 0);
    }

    #[test]
    fn test_tick_advances_by_exactly_one() {
        let (catalog, mut state) = setup();
        start(&catalog, &mut state);

        let outcome = tick(&catalog, &mut state);

        assert_eq!(outcome, TickOutcome::Advanced { step_index: 1 });
        assert!(state.running);
    }

    #[test]
    fn test_tick_is_monotonic_and_bounded() {
        let (catalog, mut state) = setup();
        start(&catalog, &mut state);

        let mut previous = state.step_index;
        for _ in 0..10 {
            tick(&catalog, &mut state);
            assert!(state.step_index >= previous);
            assert!(state.step_index - previous <= 1);
            previous = state.step_index;
        }
    }

    #[test]
    fn test_flow1_scenario_three_ticks_completes() {
        // flow1 has 4 steps: select → start → tick ×3 → completed at index 3
        let (catalog, mut state) = setup();
        select_flow(&catalog, &mut state, "flow1").unwrap();
        start(&catalog, &mut state);

        assert_eq!(tick(&catalog, &mut state), TickOutcome::Advanced { step_index: 1 });
        assert_eq!(tick(&catalog, &mut state), TickOutcome::Advanced { step_index: 2 });
        assert_eq!(tick(&catalog, &mut state), TickOutcome::Completed { step_index: 3 });

        assert!(!state.running);
        assert_eq!(state.step_index, 3);
        assert_eq!(phase(&catalog, &state), SimulationPhase::Completed);

        // A 4th tick leaves the cursor in place
        assert_eq!(tick(&catalog, &mut state), TickOutcome::Ignored);
        assert_eq!(state.step_index, 3);
    }

    #[test]
    fn test_tick_at_last_index_clears_running() {
        let (catalog, mut state) = setup();
        state.step_index = catalog.get("flow1").unwrap().last_index();
        state.running = true;

        let outcome = tick(&catalog, &mut state);

        assert_eq!(outcome, TickOutcome::Ignored);
        assert!(!state.running);
        assert_eq!(state.step_index, 3);
    }

    #[test]
    fn test_progress_bounds() {
        let (catalog, mut state) = setup();
        start(&catalog, &mut state);

        loop {
            let p = progress(&catalog, &state);
            assert!(p > 0.0 && p <= 1.0, "progress {} out of (0, 1]", p);
            if tick(&catalog, &mut state).is_completed() {
                break;
            }
        }

        // Progress is exactly 1 only at the last index
        assert_eq!(progress(&catalog, &state), 1.0);
        assert_eq!(state.step_index, catalog.get("flow1").unwrap().last_index());
    }

    #[test]
    fn test_progress_below_one_before_last_step() {
        let (catalog, state) = setup();
        assert!(progress(&catalog, &state) < 1.0);
        assert_eq!(progress(&catalog, &state), 0.25);
    }

    #[test]
    fn test_phase_derivation() {
        let (catalog, mut state) = setup();
        assert_eq!(phase(&catalog, &state), SimulationPhase::Idle);

        start(&catalog, &mut state);
        assert_eq!(phase(&catalog, &state), SimulationPhase::Running);

        while !tick(&catalog, &mut state).is_completed() {}
        assert_eq!(phase(&catalog, &state), SimulationPhase::Completed);
    }

    #[test]
    fn test_replay_is_deterministic() {
        // Two identical tick sequences produce identical states
        let catalog = FlowCatalog::builtin();
        let mut a = SimulationState::new("flow2");
        let mut b = SimulationState::new("flow2");

        for state in [&mut a, &mut b] {
            start(&catalog, state);
            tick(&catalog, state);
            pause(state);
            start(&catalog, state);
            tick(&catalog, state);
        }

        assert_eq!(a, b);
    }
}

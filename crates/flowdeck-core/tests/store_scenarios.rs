//! End-to-end scenarios through the command dispatch layer.

use flowdeck_core::{
    Command, CoreStore, DispatchError, Event, FlowdeckConfig, MetricsSnapshot, Persona,
    SimulationPhase, Store, View,
};

fn store() -> CoreStore {
    CoreStore::seeded(FlowdeckConfig::default(), 99)
}

#[test]
fn test_full_simulation_run_for_every_flow() {
    let mut store = store();
    let flow_ids: Vec<String> = store
        .catalog()
        .flows()
        .iter()
        .map(|f| f.id.clone())
        .collect();

    for flow_id in flow_ids {
        let step_count = store.catalog().get(&flow_id).unwrap().step_count();

        store
            .dispatch(Command::SelectFlow {
                flow_id: flow_id.clone(),
            })
            .unwrap();
        store.dispatch(Command::StartSimulation).unwrap();

        let mut advances = 0;
        loop {
            let events = store.dispatch(Command::Tick).unwrap();
            if events
                .iter()
                .any(|e| matches!(e, Event::SimulationAdvanced { .. }))
            {
                advances += 1;
            }
            if events
                .iter()
                .any(|e| matches!(e, Event::SimulationCompleted { .. }))
            {
                break;
            }
        }

        // N steps take exactly N-1 advancing ticks
        assert_eq!(advances, step_count - 1, "flow {}", flow_id);
        assert!(!store.session().simulation.running);
        assert_eq!(store.session().simulation.step_index, step_count - 1);
        assert_eq!(store.progress(), 1.0);
    }
}

#[test]
fn test_pause_resume_scenario() {
    let mut store = store();
    store.dispatch(Command::StartSimulation).unwrap();
    store.dispatch(Command::Tick).unwrap();

    store.dispatch(Command::PauseSimulation).unwrap();
    // Ticks while paused do not move the cursor
    for _ in 0..5 {
        let events = store.dispatch(Command::Tick).unwrap();
        assert_eq!(events, vec![Event::TickIgnored]);
    }
    assert_eq!(store.session().simulation.step_index, 1);

    // Resume picks up where the cursor stopped
    store.dispatch(Command::StartSimulation).unwrap();
    let events = store.dispatch(Command::Tick).unwrap();
    assert_eq!(events, vec![Event::SimulationAdvanced { step_index: 2 }]);
}

#[test]
fn test_reset_mid_flow_rewinds() {
    let mut store = store();
    store.dispatch(Command::StartSimulation).unwrap();
    store.dispatch(Command::Tick).unwrap();
    store.dispatch(Command::Tick).unwrap();

    store.dispatch(Command::ResetSimulation).unwrap();

    assert_eq!(store.session().simulation.step_index, 0);
    assert!(!store.session().simulation.running);
    assert_eq!(store.progress(), 0.25);
}

#[test]
fn test_restart_after_completion_rewinds_to_first_step() {
    let mut store = store();
    store.dispatch(Command::StartSimulation).unwrap();
    while !store
        .dispatch(Command::Tick)
        .unwrap()
        .iter()
        .any(|e| matches!(e, Event::SimulationCompleted { .. }))
    {}

    let events = store.dispatch(Command::StartSimulation).unwrap();

    assert_eq!(
        events,
        vec![Event::SimulationStarted {
            flow_id: "flow1".to_string(),
            step_index: 0,
        }]
    );
    assert!(store.session().simulation.running);
}

#[test]
fn test_unknown_flow_is_user_error_with_code() {
    use flowdeck_core::errors::FlowdeckError;

    let mut store = store();
    let err = store
        .dispatch(Command::SelectFlow {
            flow_id: "flow99".to_string(),
        })
        .unwrap_err();

    assert_eq!(err.error_code(), "UNKNOWN_FLOW");
    assert!(err.is_user_error());
    assert!(matches!(err, DispatchError::Flow(_)));
    // Known flows are listed in the message for discoverability
    let message = err.to_string();
    for id in ["flow1", "flow2", "flow3", "flow4"] {
        assert!(message.contains(id), "message missing {}: {}", id, message);
    }
}

#[test]
fn test_metrics_lifecycle_through_store() {
    let mut store = store();

    assert_eq!(store.session().metrics, MetricsSnapshot::baseline());

    // Interval has not elapsed on a fresh session
    let events = store
        .dispatch(Command::RefreshMetrics { force: false })
        .unwrap();
    assert_eq!(events, vec![Event::MetricsStillFresh]);

    // Forced refresh replaces the snapshot wholesale
    let events = store
        .dispatch(Command::RefreshMetrics { force: true })
        .unwrap();
    assert_eq!(events, vec![Event::MetricsRefreshed]);

    let metrics = &store.session().metrics;
    assert!(metrics.is_valid());
    assert!((metrics.avg_latency_ms - 24.5).abs() <= 2.0);
    assert!((metrics.fraud_prevented_pct - 89.7).abs() <= 0.5);
    assert!((metrics.system_uptime_pct - 99.95).abs() <= 0.05);
    assert!((metrics.throughput_tps - 1850.0).abs() <= 200.0);
    assert_eq!(metrics.total_models, 47);
    assert_eq!(metrics.active_deployments, 12);
}

#[test]
fn test_metrics_refresh_does_not_disturb_simulation() {
    let mut store = store();
    store.dispatch(Command::StartSimulation).unwrap();
    store.dispatch(Command::Tick).unwrap();
    let before = store.session().simulation.clone();

    store
        .dispatch(Command::RefreshMetrics { force: true })
        .unwrap();

    assert_eq!(store.session().simulation, before);
}

#[test]
fn test_navigation_commands() {
    let mut store = store();

    assert_eq!(store.session().active_view, View::Overview);
    assert_eq!(store.session().persona, None);

    store
        .dispatch(Command::SelectPersona {
            persona: Persona::MlopsEngineer,
        })
        .unwrap();
    store
        .dispatch(Command::SelectView {
            view: View::MlopsEngineer,
        })
        .unwrap();

    assert_eq!(store.session().persona, Some(Persona::MlopsEngineer));
    assert_eq!(store.session().active_view, View::MlopsEngineer);
}

#[test]
fn test_phase_progression_via_store() {
    use flowdeck_core::simulation::engine;

    let mut store = store();
    let phase = |s: &CoreStore| engine::phase(s.catalog(), &s.session().simulation);

    assert_eq!(phase(&store), SimulationPhase::Idle);

    store.dispatch(Command::StartSimulation).unwrap();
    assert_eq!(phase(&store), SimulationPhase::Running);

    while !store
        .dispatch(Command::Tick)
        .unwrap()
        .iter()
        .any(|e| matches!(e, Event::SimulationCompleted { .. }))
    {}
    assert_eq!(phase(&store), SimulationPhase::Completed);
}

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, error, info};

use crate::config::types::FlowdeckConfig;
use crate::flows::catalog::FlowCatalog;
use crate::metrics::generator::regenerate;
use crate::metrics::refresh::should_refresh;
use crate::session::types::SessionContext;
use crate::simulation::engine;
use crate::simulation::types::TickOutcome;
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::Command;

/// Default Store implementation that routes commands to the simulation
/// engine and metrics generator.
///
/// Owns the flow catalog, the per-session state, and the random source
/// used for metric regeneration. The CLI drives it synchronously; its
/// loops (simulate, metrics --watch) own the timing and dispatch `Tick`
/// and `RefreshMetrics` on their cadence.
pub struct CoreStore {
    catalog: FlowCatalog,
    config: FlowdeckConfig,
    session: SessionContext,
    rng: StdRng,
}

impl CoreStore {
    pub fn new(config: FlowdeckConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Store with a seeded random source, for reproducible runs.
    pub fn seeded(config: FlowdeckConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: FlowdeckConfig, rng: StdRng) -> Self {
        let catalog = FlowCatalog::builtin();
        let session = SessionContext::new(&catalog, &config, Utc::now());
        Self {
            catalog,
            config,
            session,
            rng,
        }
    }

    pub fn catalog(&self) -> &FlowCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &FlowdeckConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Display progress of the current simulation, in `(0, 1]`.
    pub fn progress(&self) -> f64 {
        engine::progress(&self.catalog, &self.session.simulation)
    }
}

impl Store for CoreStore {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        let result = match cmd {
            Command::SelectFlow { flow_id } => {
                engine::select_flow(&self.catalog, &mut self.session.simulation, &flow_id)?;
                Ok(vec![Event::FlowSelected { flow_id }])
            }
            Command::StartSimulation => {
                engine::start(&self.catalog, &mut self.session.simulation);
                Ok(vec![Event::SimulationStarted {
                    flow_id: self.session.simulation.flow_id.clone(),
                    step_index: self.session.simulation.step_index,
                }])
            }
            Command::PauseSimulation => {
                engine::pause(&mut self.session.simulation);
                Ok(vec![Event::SimulationPaused {
                    step_index: self.session.simulation.step_index,
                }])
            }
            Command::ResetSimulation => {
                engine::reset(&mut self.session.simulation);
                Ok(vec![Event::SimulationReset])
            }
            Command::Tick => {
                let outcome = engine::tick(&self.catalog, &mut self.session.simulation);
                Ok(match outcome {
                    TickOutcome::Advanced { step_index } => {
                        vec![Event::SimulationAdvanced { step_index }]
                    }
                    TickOutcome::Completed { step_index } => vec![
                        Event::SimulationAdvanced { step_index },
                        Event::SimulationCompleted {
                            flow_id: self.session.simulation.flow_id.clone(),
                        },
                    ],
                    TickOutcome::Ignored => vec![Event::TickIgnored],
                })
            }
            Command::RefreshMetrics { force } => {
                let now = Utc::now();
                let interval = self.config.metrics.refresh_interval_secs();
                if force || should_refresh(now, self.session.last_update, interval) {
                    self.session.metrics = regenerate(&mut self.rng, &self.config.metrics);
                    self.session.last_update = now;
                    Ok(vec![Event::MetricsRefreshed])
                } else {
                    Ok(vec![Event::MetricsStillFresh])
                }
            }
            Command::SelectView { view } => {
                self.session.active_view = view;
                Ok(vec![Event::ViewChanged { view }])
            }
            Command::SelectPersona { persona } => {
                self.session.persona = Some(persona);
                Ok(vec![Event::PersonaChanged { persona }])
            }
        };

        match &result {
            Ok(events) => info!(
                event = "core.state.dispatch_completed",
                event_count = events.len()
            ),
            Err(e) => error!(event = "core.state.dispatch_failed", error = %e),
        }

        result
    }
}

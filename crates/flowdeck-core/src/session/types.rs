use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::types::FlowdeckConfig;
use crate::flows::catalog::FlowCatalog;
use crate::metrics::types::MetricsSnapshot;
use crate::simulation::types::SimulationState;

/// User persona the console is being viewed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Persona {
    DataScientist,
    MlopsEngineer,
    RiskOperations,
    Executive,
}

impl Persona {
    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::DataScientist => "data-scientist",
            Persona::MlopsEngineer => "mlops-engineer",
            Persona::RiskOperations => "risk-operations",
            Persona::Executive => "executive",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "data-scientist" => Some(Persona::DataScientist),
            "mlops-engineer" => Some(Persona::MlopsEngineer),
            "risk-operations" => Some(Persona::RiskOperations),
            "executive" => Some(Persona::Executive),
            _ => None,
        }
    }
}

/// Active navigation view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    #[default]
    Overview,
    DataScientist,
    MlopsEngineer,
    RiskOperations,
    Executive,
    Workflows,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::DataScientist => "data-scientist",
            View::MlopsEngineer => "mlops-engineer",
            View::RiskOperations => "risk-operations",
            View::Executive => "executive",
            View::Workflows => "workflows",
        }
    }
}

/// All mutable per-session state, owned by the top-level controller.
///
/// Created once at session start and threaded by reference into every
/// operation; there are no hidden statics. The flow catalog is shared,
/// read-only, and deliberately not part of this struct.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    /// Selected persona, if any.
    pub persona: Option<Persona>,
    /// Active navigation view.
    pub active_view: View,
    /// Current metrics snapshot, replaced wholesale on refresh.
    pub metrics: MetricsSnapshot,
    /// When the snapshot was last replaced.
    pub last_update: DateTime<Utc>,
    /// Live flow simulation cursor.
    pub simulation: SimulationState,
}

impl SessionContext {
    /// Fresh session state: no persona, overview view, baseline metrics,
    /// and the configured default flow with the simulation idle at step 0.
    pub fn new(catalog: &FlowCatalog, config: &FlowdeckConfig, now: DateTime<Utc>) -> Self {
        let default_flow = config.simulation.default_flow();
        let flow_id = if catalog.contains(default_flow) {
            default_flow.to_string()
        } else {
            // Config validation rejects unknown defaults; fall back to the
            // first catalog entry if an unvalidated config slips through.
            catalog.first().id.clone()
        };

        Self {
            persona: None,
            active_view: View::default(),
            metrics: MetricsSnapshot::baseline(),
            last_update: now,
            simulation: SimulationState::new(flow_id),
        }
    }
}

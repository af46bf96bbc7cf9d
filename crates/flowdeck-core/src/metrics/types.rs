use serde::{Deserialize, Serialize};

/// Point-in-time bundle of platform metric values.
///
/// Invariant: every field is non-negative. Snapshots are replaced
/// wholesale on refresh, never mutated field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    /// Models registered across the platform.
    pub total_models: u32,
    /// Model endpoints currently serving traffic.
    pub active_deployments: u32,
    /// Average inference latency in milliseconds.
    pub avg_latency_ms: f64,
    /// Fraud-prevention rate as a percentage.
    pub fraud_prevented_pct: f64,
    /// Estimated cost savings in millions of dollars.
    pub cost_savings_millions: f64,
    /// System uptime as a percentage.
    pub system_uptime_pct: f64,
    /// Scoring throughput in transactions per second.
    pub throughput_tps: f64,
}

impl MetricsSnapshot {
    /// The fixed baseline every refresh draws from.
    ///
    /// Regeneration perturbs a subset of these values; the rest are
    /// carried through unchanged, so any two snapshots agree on the
    /// non-perturbed fields.
    pub fn baseline() -> Self {
        Self {
            total_models: 47,
            active_deployments: 12,
            avg_latency_ms: 24.5,
            fraud_prevented_pct: 89.7,
            cost_savings_millions: 2.4,
            system_uptime_pct: 99.95,
            throughput_tps: 1850.0,
        }
    }

    /// Whether every field satisfies the non-negativity invariant.
    pub fn is_valid(&self) -> bool {
        self.avg_latency_ms >= 0.0
            && self.fraud_prevented_pct >= 0.0
            && self.cost_savings_millions >= 0.0
            && self.system_uptime_pct >= 0.0
            && self.throughput_tps >= 0.0
    }
}

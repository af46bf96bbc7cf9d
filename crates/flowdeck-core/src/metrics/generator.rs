//! Snapshot regeneration.
//!
//! Each refresh is a fresh draw from the fixed baseline, not a random
//! walk over the previous snapshot: the perturbed fields are baseline
//! plus a bounded uniform delta, and everything else is the baseline
//! value verbatim. Values can therefore jump between consecutive
//! refreshes; that matches the system being mimicked.

use rand::Rng;

use crate::config::types::MetricsConfig;
use crate::metrics::types::MetricsSnapshot;

/// Generate a new snapshot from the baseline.
///
/// Perturbs latency, fraud-prevention rate, uptime, and throughput by a
/// uniform delta within the configured half-ranges, clamping each
/// perturbed field to a minimum of 0. Total and pure given the random
/// source; no error conditions.
pub fn regenerate<R: Rng + ?Sized>(rng: &mut R, config: &MetricsConfig) -> MetricsSnapshot {
    let baseline = MetricsSnapshot::baseline();

    MetricsSnapshot {
        avg_latency_ms: perturb(rng, baseline.avg_latency_ms, config.latency_jitter_ms()),
        fraud_prevented_pct: perturb(
            rng,
            baseline.fraud_prevented_pct,
            config.fraud_rate_jitter(),
        ),
        system_uptime_pct: perturb(rng, baseline.system_uptime_pct, config.uptime_jitter()),
        throughput_tps: perturb(rng, baseline.throughput_tps, config.throughput_jitter()),
        ..baseline
    }
}

fn perturb<R: Rng + ?Sized>(rng: &mut R, base: f64, half_range: f64) -> f64 {
    if half_range == 0.0 {
        return base.max(0.0);
    }
    let delta = rng.gen_range(-half_range..=half_range);
    (base + delta).max(0.0)
}

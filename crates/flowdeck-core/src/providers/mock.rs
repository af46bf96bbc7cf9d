//! Fabricated data feeds.
//!
//! Randomized feeds (experiments, fraud events) draw fresh values on
//! every call; the remaining tables are fixed so the console stays
//! recognizable across refreshes.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::providers::SampleDataProvider;
use crate::providers::types::{
    ActivityEntry, ActivityKind, ActivitySeverity, ComponentHealth, Experiment, ExperimentStatus,
    FeatureImportance, FraudEvent, HealthStatus, ModelPerformance, RiskLevel,
};

const EXPERIMENT_COUNT: usize = 8;

const ALGORITHMS: &[&str] = &[
    "XGBoost",
    "Neural Network",
    "Random Forest",
    "LSTM",
    "SVM",
    "Gradient Boosting",
];

const FRAUD_REASONS: &[&str] = &[
    "High payment decline rate",
    "Unusual transaction pattern",
    "New seller from high-risk region",
    "Rapid price changes detected",
    "Suspicious inventory behavior",
    "Multiple account flags",
];

const EXPERIMENT_STATUSES: &[ExperimentStatus] = &[
    ExperimentStatus::Running,
    ExperimentStatus::Completed,
    ExperimentStatus::Failed,
    ExperimentStatus::Pending,
];

const RISK_LEVELS: &[RiskLevel] = &[
    RiskLevel::Low,
    RiskLevel::Medium,
    RiskLevel::High,
    RiskLevel::Critical,
];

/// The only [`SampleDataProvider`] implementation; everything it
/// returns is fabricated.
pub struct MockDataProvider {
    rng: StdRng,
}

impl MockDataProvider {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Provider with a seeded random source, for reproducible output.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for MockDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleDataProvider for MockDataProvider {
    fn experiments(&mut self) -> Vec<Experiment> {
        (1..=EXPERIMENT_COUNT)
            .map(|i| {
                let algorithm = ALGORITHMS.choose(&mut self.rng).copied().unwrap_or("XGBoost");
                let major = self.rng.gen_range(1..=3);
                let minor = self.rng.gen_range(0..=9);
                Experiment {
                    id: format!("exp-{:03}", i),
                    name: format!("Fraud Detection {} v{}.{}", algorithm, major, minor),
                    status: *EXPERIMENT_STATUSES
                        .choose(&mut self.rng)
                        .unwrap_or(&ExperimentStatus::Pending),
                    accuracy: round1(self.rng.gen_range(85.0..95.0)),
                    f1_score: round1(self.rng.gen_range(80.0..92.0)),
                    precision: round1(self.rng.gen_range(82.0..94.0)),
                    recall: round1(self.rng.gen_range(78.0..96.0)),
                    runtime: format!(
                        "{}h {}m",
                        self.rng.gen_range(1..=4),
                        self.rng.gen_range(10..=59)
                    ),
                    created: format!("{} days ago", self.rng.gen_range(1..=7)),
                }
            })
            .collect()
    }

    fn feature_importance(&mut self) -> Vec<FeatureImportance> {
        let rows: &[(&str, f64, &str, &str)] = &[
            ("payment_decline_rate_7d", 0.234, "numerical", "payment_events"),
            ("seller_age_days", 0.198, "numerical", "seller_profile"),
            ("avg_transaction_amount", 0.156, "numerical", "transactions"),
            ("country_risk_score", 0.142, "categorical", "geo_data"),
            ("product_category_risk", 0.128, "categorical", "catalog"),
            ("velocity_score", 0.089, "numerical", "behavior_analytics"),
            ("payment_method_risk", 0.053, "categorical", "payment_events"),
        ];
        rows.iter()
            .map(|(name, importance, feature_type, source)| FeatureImportance {
                name: name.to_string(),
                importance: *importance,
                feature_type: feature_type.to_string(),
                source: source.to_string(),
            })
            .collect()
    }

    fn system_components(&mut self) -> Vec<ComponentHealth> {
        let rows: &[(&str, HealthStatus, &str, &str)] = &[
            ("Model Serving", HealthStatus::Healthy, "99.98%", "23ms"),
            ("Feature Store", HealthStatus::Healthy, "99.95%", "12ms"),
            ("Data Pipeline", HealthStatus::Healthy, "99.92%", "45ms"),
            ("Monitoring", HealthStatus::Warning, "98.87%", "78ms"),
            ("API Gateway", HealthStatus::Healthy, "99.99%", "8ms"),
            ("Authentication", HealthStatus::Healthy, "99.94%", "15ms"),
        ];
        rows.iter()
            .map(|(name, status, uptime, response_time)| ComponentHealth {
                name: name.to_string(),
                status: *status,
                uptime: uptime.to_string(),
                response_time: response_time.to_string(),
            })
            .collect()
    }

    fn recent_activity(&mut self) -> Vec<ActivityEntry> {
        let rows: &[(&str, &str, ActivityKind, ActivitySeverity)] = &[
            (
                "2 min ago",
                "Model fraud-detector-v2.1 deployed to production",
                ActivityKind::Deployment,
                ActivitySeverity::Success,
            ),
            (
                "5 min ago",
                "High-risk seller flagged: Seller ID 12847",
                ActivityKind::Alert,
                ActivitySeverity::Warning,
            ),
            (
                "12 min ago",
                "Feature store updated with new payment patterns",
                ActivityKind::Update,
                ActivitySeverity::Info,
            ),
            (
                "18 min ago",
                "A/B test started: Champion vs Challenger model",
                ActivityKind::Experiment,
                ActivitySeverity::Info,
            ),
            (
                "25 min ago",
                "Data pipeline completed: 2.3M transactions processed",
                ActivityKind::Pipeline,
                ActivitySeverity::Success,
            ),
            (
                "35 min ago",
                "Model performance alert: Accuracy dropped to 87%",
                ActivityKind::Alert,
                ActivitySeverity::Error,
            ),
            (
                "42 min ago",
                "New feature deployed: real-time risk scoring",
                ActivityKind::Deployment,
                ActivitySeverity::Success,
            ),
            (
                "1 hour ago",
                "Weekly model retraining completed successfully",
                ActivityKind::Training,
                ActivitySeverity::Success,
            ),
        ];
        rows.iter()
            .map(|(time, event, kind, severity)| ActivityEntry {
                time: time.to_string(),
                event: event.to_string(),
                kind: *kind,
                severity: *severity,
            })
            .collect()
    }

    fn fraud_events(&mut self, count: usize) -> Vec<FraudEvent> {
        let now = Utc::now();
        let mut events: Vec<FraudEvent> = (0..count)
            .map(|_| FraudEvent {
                timestamp: now - Duration::minutes(self.rng.gen_range(1..=120)),
                seller_id: format!("S{}", self.rng.gen_range(10_000..=99_999)),
                risk_score: round3(self.rng.gen_range(0.1..0.95)),
                risk_level: *RISK_LEVELS.choose(&mut self.rng).unwrap_or(&RiskLevel::Low),
                confidence: round3(self.rng.gen_range(0.7..0.99)),
                reason: FRAUD_REASONS
                    .choose(&mut self.rng)
                    .copied()
                    .unwrap_or("Unusual transaction pattern")
                    .to_string(),
            })
            .collect();
        events.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        events
    }

    fn model_performance(&mut self) -> Vec<ModelPerformance> {
        let rows: &[(&str, f64, f64, f64, f64)] = &[
            ("Fraud Detector v1", 89.2, 87.5, 91.3, 89.4),
            ("Fraud Detector v2", 92.1, 90.2, 93.8, 92.0),
            ("Risk Scorer v1", 85.7, 83.1, 88.2, 85.6),
            ("Risk Scorer v2", 88.9, 86.7, 91.1, 88.8),
            ("Behavior Analyzer v1", 83.4, 81.2, 85.6, 83.3),
        ];
        rows.iter()
            .map(|(name, accuracy, precision, recall, f1_score)| ModelPerformance {
                name: name.to_string(),
                accuracy: *accuracy,
                precision: *precision,
                recall: *recall,
                f1_score: *f1_score,
            })
            .collect()
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> MockDataProvider {
        MockDataProvider::seeded(5)
    }

    #[test]
    fn test_experiments_count_and_ids() {
        let experiments = provider().experiments();
        assert_eq!(experiments.len(), 8);
        assert_eq!(experiments[0].id, "exp-001");
        assert_eq!(experiments[7].id, "exp-008");
    }

    #[test]
    fn test_experiment_values_within_ranges() {
        let mut provider = provider();
        for _ in 0..100 {
            for exp in provider.experiments() {
                assert!(exp.accuracy >= 85.0 && exp.accuracy <= 95.0);
                assert!(exp.f1_score >= 80.0 && exp.f1_score <= 92.0);
                assert!(exp.precision >= 82.0 && exp.precision <= 94.0);
                assert!(exp.recall >= 78.0 && exp.recall <= 96.0);
                assert!(exp.name.starts_with("Fraud Detection "));
            }
        }
    }

    #[test]
    fn test_fraud_events_newest_first() {
        let events = provider().fraud_events(20);
        assert_eq!(events.len(), 20);
        for pair in events.windows(2) {
            assert!(pair[0].timestamp >= pair[1].timestamp);
        }
    }

    #[test]
    fn test_fraud_event_values_within_ranges() {
        let mut provider = provider();
        for event in provider.fraud_events(200) {
            assert!(event.risk_score >= 0.1 && event.risk_score <= 0.95);
            assert!(event.confidence >= 0.7 && event.confidence <= 0.99);
            assert!(event.seller_id.starts_with('S'));
            assert_eq!(event.seller_id.len(), 6);
            assert!(FRAUD_REASONS.contains(&event.reason.as_str()));
        }
    }

    #[test]
    fn test_fraud_events_respects_count() {
        let mut provider = provider();
        assert_eq!(provider.fraud_events(3).len(), 3);
        assert!(provider.fraud_events(0).is_empty());
    }

    #[test]
    fn test_feature_importance_is_descending() {
        let features = provider().feature_importance();
        assert_eq!(features.len(), 7);
        for pair in features.windows(2) {
            assert!(pair[0].importance >= pair[1].importance);
        }
    }

    #[test]
    fn test_system_components_table() {
        let components = provider().system_components();
        assert_eq!(components.len(), 6);
        let warnings: Vec<_> = components
            .iter()
            .filter(|c| c.status == HealthStatus::Warning)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].name, "Monitoring");
    }

    #[test]
    fn test_recent_activity_table() {
        let activity = provider().recent_activity();
        assert_eq!(activity.len(), 8);
        assert_eq!(activity[0].time, "2 min ago");
        assert_eq!(activity[0].severity, ActivitySeverity::Success);
    }

    #[test]
    fn test_model_performance_table() {
        let models = provider().model_performance();
        assert_eq!(models.len(), 5);
        assert_eq!(models[1].name, "Fraud Detector v2");
        assert_eq!(models[1].accuracy, 92.1);
    }

    #[test]
    fn test_seeded_provider_is_reproducible() {
        let a = MockDataProvider::seeded(42).experiments();
        let b = MockDataProvider::seeded(42).experiments();
        assert_eq!(a, b);
    }
}

//! Sample data providers.
//!
//! Everything the console shows beyond the core metrics comes from a
//! [`SampleDataProvider`], a trait over synthetic feeds so a real data
//! source could be substituted later. [`MockDataProvider`] is the only
//! implementation; it fabricates plausible values and never touches a
//! real system.

pub mod mock;
pub mod types;

pub use mock::MockDataProvider;
pub use types::{
    ActivityEntry, ActivityKind, ActivitySeverity, ComponentHealth, Experiment, ExperimentStatus,
    FeatureImportance, FraudEvent, HealthStatus, ModelPerformance, RiskLevel,
};

/// Source of the non-metric data feeds shown by the console.
///
/// Methods take `&mut self` because implementations may consume a
/// random source. Every call is independent; no feed carries state
/// between calls.
pub trait SampleDataProvider {
    /// Recent training experiments, fixed at eight entries.
    fn experiments(&mut self) -> Vec<Experiment>;
    /// Feature importance table for the active fraud model.
    fn feature_importance(&mut self) -> Vec<FeatureImportance>;
    /// Health of the platform's serving components.
    fn system_components(&mut self) -> Vec<ComponentHealth>;
    /// Recent platform activity feed, newest first.
    fn recent_activity(&mut self) -> Vec<ActivityEntry>;
    /// Fraud detection events, newest first.
    fn fraud_events(&mut self, count: usize) -> Vec<FraudEvent>;
    /// Accuracy comparison across deployed model versions.
    fn model_performance(&mut self) -> Vec<ModelPerformance>;
}

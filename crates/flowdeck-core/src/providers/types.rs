use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a training experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperimentStatus {
    Running,
    Completed,
    Failed,
    Pending,
}

impl ExperimentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperimentStatus::Running => "running",
            ExperimentStatus::Completed => "completed",
            ExperimentStatus::Failed => "failed",
            ExperimentStatus::Pending => "pending",
        }
    }
}

/// A single training experiment row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experiment {
    pub id: String,
    pub name: String,
    pub status: ExperimentStatus,
    pub accuracy: f64,
    pub f1_score: f64,
    pub precision: f64,
    pub recall: f64,
    pub runtime: String,
    pub created: String,
}

/// One row of the feature importance table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub name: String,
    pub importance: f64,
    pub feature_type: String,
    pub source: String,
}

/// Reported health of a platform component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Warning,
}

impl HealthStatus {
    pub fn icon(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "✅",
            HealthStatus::Warning => "⚠️",
        }
    }
}

/// Health summary for one serving component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: HealthStatus,
    pub uptime: String,
    pub response_time: String,
}

/// Category of a recent-activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Deployment,
    Alert,
    Update,
    Experiment,
    Pipeline,
    Training,
}

/// Severity of a recent-activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivitySeverity {
    Success,
    Warning,
    Info,
    Error,
}

/// One row of the recent activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub time: String,
    pub event: String,
    pub kind: ActivityKind,
    pub severity: ActivitySeverity,
}

/// Risk classification attached to a fraud event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
            RiskLevel::Critical => "CRITICAL",
        }
    }
}

/// A single fraud detection event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FraudEvent {
    pub timestamp: DateTime<Utc>,
    pub seller_id: String,
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub confidence: f64,
    pub reason: String,
}

/// Accuracy comparison row for one deployed model version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelPerformance {
    pub name: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
}

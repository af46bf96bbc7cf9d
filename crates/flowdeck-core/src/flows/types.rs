use serde::{Deserialize, Serialize};

/// Design-time status label attached to a step definition.
///
/// This is the illustrative status shown on the static flow cards. It is
/// independent of the live simulation cursor, which only tracks an index
/// into the step sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Pending,
    Running,
    Completed,
    Failed,
}

impl StepStatus {
    /// Icon used when rendering the step in text output.
    pub fn icon(&self) -> &'static str {
        match self {
            StepStatus::Completed => "✅",
            StepStatus::Running => "🔄",
            StepStatus::Pending => "⏳",
            StepStatus::Failed => "❌",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, StepStatus::Completed | StepStatus::Failed)
    }
}

/// One stage of a deployment flow.
///
/// Static per flow; the status here is the design-time label, not live
/// simulation state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDefinition {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: StepStatus,
    /// Display label like "2m 15s". Steps that have not produced a
    /// representative timing carry `None`.
    #[serde(default)]
    pub duration: Option<String>,
    /// Short detail lines rendered under the step description.
    #[serde(default)]
    pub details: Vec<String>,
}

/// Illustrative aggregate stats shown in the flow comparison table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowStats {
    pub avg_duration: String,
    pub success_rate_pct: f64,
    pub complexity: String,
}

/// A named, ordered sequence of deployment steps.
///
/// Invariant: `steps` is non-empty. The catalog enforces this at
/// construction, so consumers can index the last step without checking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub steps: Vec<StepDefinition>,
    pub stats: FlowStats,
}

impl FlowDefinition {
    /// Number of steps in this flow. Always at least 1.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Index of the final step.
    pub fn last_index(&self) -> usize {
        self.steps.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_status_serializes_lowercase() {
        let json = serde_json::to_string(&StepStatus::Running).unwrap();
        assert_eq!(json, "\"running\"");
        let parsed: StepStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, StepStatus::Completed);
    }

    #[test]
    fn test_step_status_terminal() {
        assert!(StepStatus::Completed.is_terminal());
        assert!(StepStatus::Failed.is_terminal());
        assert!(!StepStatus::Running.is_terminal());
        assert!(!StepStatus::Pending.is_terminal());
    }

    #[test]
    fn test_step_definition_deserialize_without_duration() {
        let json = r#"{
            "id": "step3",
            "title": "Staging Deployment",
            "description": "Deploy to staging environment for testing",
            "status": "pending",
            "details": ["Create staging endpoint"]
        }"#;
        let step: StepDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(step.duration, None);
        assert_eq!(step.details.len(), 1);
    }

    #[test]
    fn test_flow_definition_indices() {
        let flow = FlowDefinition {
            id: "f".to_string(),
            name: "F".to_string(),
            description: String::new(),
            icon: String::new(),
            steps: vec![
                StepDefinition {
                    id: "s1".to_string(),
                    title: "One".to_string(),
                    description: String::new(),
                    status: StepStatus::Pending,
                    duration: None,
                    details: vec![],
                },
                StepDefinition {
                    id: "s2".to_string(),
                    title: "Two".to_string(),
                    description: String::new(),
                    status: StepStatus::Pending,
                    duration: None,
                    details: vec![],
                },
            ],
            stats: FlowStats {
                avg_duration: "1m".to_string(),
                success_rate_pct: 99.0,
                complexity: "Low".to_string(),
            },
        };
        assert_eq!(flow.step_count(), 2);
        assert_eq!(flow.last_index(), 1);
    }
}

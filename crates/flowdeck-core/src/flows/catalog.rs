//! The built-in deployment flow catalog.
//!
//! Four flows covering the deployment paths the demo walks through:
//! same-project, cross-project, real-time serving, and external import.
//! Loaded once; ids are unique and every flow has at least one step.

use crate::flows::types::{FlowDefinition, FlowStats, StepDefinition, StepStatus};

/// Read-only collection of flow definitions, constructed once and shared.
#[derive(Debug, Clone)]
pub struct FlowCatalog {
    flows: Vec<FlowDefinition>,
}

impl FlowCatalog {
    /// Build the catalog of the four built-in deployment flows.
    pub fn builtin() -> Self {
        let flows = vec![
            same_project_flow(),
            cross_project_flow(),
            realtime_flow(),
            external_import_flow(),
        ];
        debug_assert!(flows.iter().all(|f| !f.steps.is_empty()));
        Self { flows }
    }

    /// All flows, in display order.
    pub fn flows(&self) -> &[FlowDefinition] {
        &self.flows
    }

    /// Look up a flow by id.
    pub fn get(&self, id: &str) -> Option<&FlowDefinition> {
        self.flows.iter().find(|f| f.id == id)
    }

    /// Whether the catalog contains the given id.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// The first flow in display order, used as the session default.
    pub fn first(&self) -> &FlowDefinition {
        // builtin() always produces a non-empty catalog
        &self.flows[0]
    }
}

fn step(
    id: &str,
    title: &str,
    description: &str,
    status: StepStatus,
    duration: Option<&str>,
    details: &[&str],
) -> StepDefinition {
    StepDefinition {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        status,
        duration: duration.map(str::to_string),
        details: details.iter().map(|d| d.to_string()).collect(),
    }
}

fn same_project_flow() -> FlowDefinition {
    FlowDefinition {
        id: "flow1".to_string(),
        name: "Same Project (Element → Element)".to_string(),
        description: "Deploy models within the same project environment".to_string(),
        icon: "🗂️".to_string(),
        steps: vec![
            step(
                "step1",
                "Model Registration",
                "Register new model version in Element registry",
                StepStatus::Completed,
                Some("30s"),
                &[
                    "Validate model artifacts",
                    "Check model schema",
                    "Generate model metadata",
                ],
            ),
            step(
                "step2",
                "Quality Gates",
                "Run automated quality checks and validation",
                StepStatus::Running,
                Some("2m 15s"),
                &[
                    "Performance benchmarking",
                    "Data drift detection",
                    "Model bias assessment",
                ],
            ),
            step(
                "step3",
                "Staging Deployment",
                "Deploy to staging environment for testing",
                StepStatus::Pending,
                None,
                &[
                    "Create staging endpoint",
                    "Configure load balancer",
                    "Run smoke tests",
                ],
            ),
            step(
                "step4",
                "Production Deployment",
                "Deploy to production with canary release",
                StepStatus::Pending,
                None,
                &["Blue-green deployment", "Traffic splitting", "Monitor metrics"],
            ),
        ],
        stats: FlowStats {
            avg_duration: "8m 32s".to_string(),
            success_rate_pct: 97.3,
            complexity: "Medium".to_string(),
        },
    }
}

fn cross_project_flow() -> FlowDefinition {
    FlowDefinition {
        id: "flow2".to_string(),
        name: "Cross-Project (Element → Element)".to_string(),
        description: "Deploy models across different project boundaries".to_string(),
        icon: "🔄".to_string(),
        steps: vec![
            step(
                "step1",
                "Cross-Project Authorization",
                "Validate permissions and access controls",
                StepStatus::Completed,
                Some("45s"),
                &[
                    "Check IAM policies",
                    "Validate project permissions",
                    "Audit trail logging",
                ],
            ),
            step(
                "step2",
                "Model Export",
                "Export model from source project",
                StepStatus::Completed,
                Some("1m 30s"),
                &[
                    "Package model artifacts",
                    "Export feature definitions",
                    "Generate compatibility report",
                ],
            ),
            step(
                "step3",
                "Cross-Project Transfer",
                "Secure transfer to target project",
                StepStatus::Running,
                Some("3m 45s"),
                &[
                    "Encrypted model transfer",
                    "Dependency resolution",
                    "Environment compatibility check",
                ],
            ),
            step(
                "step4",
                "Target Deployment",
                "Deploy in target project environment",
                StepStatus::Pending,
                None,
                &["Environment setup", "Model registration", "Integration testing"],
            ),
        ],
        stats: FlowStats {
            avg_duration: "12m 15s".to_string(),
            success_rate_pct: 94.8,
            complexity: "High".to_string(),
        },
    }
}

fn realtime_flow() -> FlowDefinition {
    FlowDefinition {
        id: "flow3".to_string(),
        name: "Element → WCNP (Real-time)".to_string(),
        description: "Deploy to the cloud-native platform for real-time inference".to_string(),
        icon: "⚡".to_string(),
        steps: vec![
            step(
                "step1",
                "WCNP Integration Setup",
                "Configure WCNP deployment pipeline",
                StepStatus::Completed,
                Some("1m 15s"),
                &[
                    "Setup Kubernetes namespace",
                    "Configure service mesh",
                    "Deploy monitoring stack",
                ],
            ),
            step(
                "step2",
                "Model Containerization",
                "Package model in optimized container",
                StepStatus::Completed,
                Some("2m 30s"),
                &["Build Docker image", "Optimize for inference", "Security scanning"],
            ),
            step(
                "step3",
                "Real-time Endpoint Creation",
                "Create high-performance inference endpoint",
                StepStatus::Running,
                Some("4m 20s"),
                &[
                    "Deploy to Kubernetes",
                    "Configure auto-scaling",
                    "Setup load balancing",
                ],
            ),
            step(
                "step4",
                "Performance Validation",
                "Validate latency and throughput requirements",
                StepStatus::Pending,
                None,
                &[
                    "Latency testing (<50ms)",
                    "Throughput validation (100K+ TPS)",
                    "Stress testing",
                ],
            ),
        ],
        stats: FlowStats {
            avg_duration: "6m 45s".to_string(),
            success_rate_pct: 98.9,
            complexity: "Low".to_string(),
        },
    }
}

fn external_import_flow() -> FlowDefinition {
    FlowDefinition {
        id: "flow4".to_string(),
        name: "External → Element".to_string(),
        description: "Import and deploy models from external sources".to_string(),
        icon: "☁️".to_string(),
        steps: vec![
            step(
                "step1",
                "External Model Import",
                "Import model from external source",
                StepStatus::Completed,
                Some("2m 45s"),
                &[
                    "Download model artifacts",
                    "Validate model format",
                    "Security scanning",
                ],
            ),
            step(
                "step2",
                "Compatibility Assessment",
                "Assess compatibility with the Element platform",
                StepStatus::Completed,
                Some("1m 50s"),
                &["Framework compatibility", "Dependency analysis", "Feature mapping"],
            ),
            step(
                "step3",
                "Model Adaptation",
                "Adapt model for Element deployment",
                StepStatus::Running,
                Some("5m 10s"),
                &[
                    "Convert model format",
                    "Update dependencies",
                    "Create wrapper services",
                ],
            ),
            step(
                "step4",
                "Element Integration",
                "Integrate with the Element ecosystem",
                StepStatus::Pending,
                None,
                &[
                    "Register in model catalog",
                    "Setup monitoring",
                    "Configure governance",
                ],
            ),
        ],
        stats: FlowStats {
            avg_duration: "15m 20s".to_string(),
            success_rate_pct: 92.1,
            complexity: "High".to_string(),
        },
    }
}

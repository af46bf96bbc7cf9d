use flowdeck_core::{Experiment, FlowDefinition, FraudEvent, MetricsSnapshot, StepDefinition};

pub struct FlowTableFormatter {
    id_width: usize,
    name_width: usize,
    steps_width: usize,
    duration_width: usize,
    success_width: usize,
    complexity_width: usize,
}

impl FlowTableFormatter {
    pub fn new(flows: &[FlowDefinition]) -> Self {
        let name_width = flows
            .iter()
            .map(|f| f.name.chars().count())
            .max()
            .unwrap_or(20)
            .clamp(4, 50); // Between "Name" header min and reasonable terminal width max

        Self {
            id_width: 6,
            name_width,
            steps_width: 5,
            duration_width: 12,
            success_width: 9,
            complexity_width: 10,
        }
    }

    pub fn print_table(&self, flows: &[FlowDefinition]) {
        println!("{}", self.top_border());
        println!("{}", self.header_row());
        println!("{}", self.separator());
        for flow in flows {
            self.print_row(flow);
        }
        println!("{}", self.bottom_border());
    }

    fn print_row(&self, flow: &FlowDefinition) {
        println!(
            "│ {:<width_id$} │ {:<width_name$} │ {:<width_steps$} │ {:<width_duration$} │ {:<width_success$} │ {:<width_complexity$} │",
            truncate(&flow.id, self.id_width),
            truncate(&flow.name, self.name_width),
            flow.step_count(),
            truncate(&flow.stats.avg_duration, self.duration_width),
            format!("{:.1}%", flow.stats.success_rate_pct),
            truncate(&flow.stats.complexity, self.complexity_width),
            width_id = self.id_width,
            width_name = self.name_width,
            width_steps = self.steps_width,
            width_duration = self.duration_width,
            width_success = self.success_width,
            width_complexity = self.complexity_width,
        );
    }

    fn top_border(&self) -> String {
        format!(
            "┌{}┬{}┬{}┬{}┬{}┬{}┐",
            "─".repeat(self.id_width + 2),
            "─".repeat(self.name_width + 2),
            "─".repeat(self.steps_width + 2),
            "─".repeat(self.duration_width + 2),
            "─".repeat(self.success_width + 2),
            "─".repeat(self.complexity_width + 2),
        )
    }

    fn header_row(&self) -> String {
        format!(
            "│ {:<width_id$} │ {:<width_name$} │ {:<width_steps$} │ {:<width_duration$} │ {:<width_success$} │ {:<width_complexity$} │",
            "Id",
            "Name",
            "Steps",
            "Avg Duration",
            "Success",
            "Complexity",
            width_id = self.id_width,
            width_name = self.name_width,
            width_steps = self.steps_width,
            width_duration = self.duration_width,
            width_success = self.success_width,
            width_complexity = self.complexity_width,
        )
    }

    fn separator(&self) -> String {
        format!(
            "├{}┼{}┼{}┼{}┼{}┼{}┤",
            "─".repeat(self.id_width + 2),
            "─".repeat(self.name_width + 2),
            "─".repeat(self.steps_width + 2),
            "─".repeat(self.duration_width + 2),
            "─".repeat(self.success_width + 2),
            "─".repeat(self.complexity_width + 2),
        )
    }

    fn bottom_border(&self) -> String {
        format!(
            "└{}┴{}┴{}┴{}┴{}┴{}┘",
            "─".repeat(self.id_width + 2),
            "─".repeat(self.name_width + 2),
            "─".repeat(self.steps_width + 2),
            "─".repeat(self.duration_width + 2),
            "─".repeat(self.success_width + 2),
            "─".repeat(self.complexity_width + 2),
        )
    }
}

pub fn print_metrics(metrics: &MetricsSnapshot) {
    println!("📊 Platform Metrics");
    println!("┌──────────────────────────────────────────────┐");
    println!("│ Total Models:        {:<23} │", metrics.total_models);
    println!(
        "│ Active Deployments:  {:<23} │",
        metrics.active_deployments
    );
    println!(
        "│ Avg Latency:         {:<23} │",
        format!("{:.1} ms", metrics.avg_latency_ms)
    );
    println!(
        "│ Fraud Prevented:     {:<23} │",
        format!("{:.1}%", metrics.fraud_prevented_pct)
    );
    println!(
        "│ Cost Savings:        {:<23} │",
        format!("${:.1}M", metrics.cost_savings_millions)
    );
    println!(
        "│ System Uptime:       {:<23} │",
        format!("{:.2}%", metrics.system_uptime_pct)
    );
    println!(
        "│ Throughput:          {:<23} │",
        format!("{:.0} TPS", metrics.throughput_tps)
    );
    println!("└──────────────────────────────────────────────┘");
}

pub fn print_step_card(step: &StepDefinition, index: usize, total: usize) {
    println!(
        "{} Step {}/{}: {}",
        step.status.icon(),
        index + 1,
        total,
        step.title
    );
    println!("   {}", step.description);
    if let Some(duration) = &step.duration {
        println!("   Duration: {}", duration);
    }
    for detail in &step.details {
        println!("   - {}", detail);
    }
}

pub fn print_fraud_table(events: &[FraudEvent]) {
    if events.is_empty() {
        println!("No fraud events.");
        return;
    }

    println!("🚨 Fraud Detection Events");
    println!(
        "┌──────────┬───────────┬────────┬──────────┬────────────┬──────────────────────────────────┐"
    );
    println!(
        "│ Time     │ Seller    │ Score  │ Level    │ Confidence │ Reason                           │"
    );
    println!(
        "├──────────┼───────────┼────────┼──────────┼────────────┼──────────────────────────────────┤"
    );

    for event in events {
        println!(
            "│ {:<8} │ {:<9} │ {:<6} │ {:<8} │ {:<10} │ {:<32} │",
            event.timestamp.format("%H:%M:%S"),
            truncate(&event.seller_id, 9),
            format!("{:.3}", event.risk_score),
            event.risk_level.as_str(),
            format!("{:.3}", event.confidence),
            truncate(&event.reason, 32),
        );
    }

    println!(
        "└──────────┴───────────┴────────┴──────────┴────────────┴──────────────────────────────────┘"
    );
}

pub fn print_experiments_table(experiments: &[Experiment]) {
    if experiments.is_empty() {
        println!("No experiments.");
        return;
    }

    println!("🧪 Recent Experiments");
    println!(
        "┌─────────┬──────────────────────────────────┬───────────┬──────────┬──────────┬────────────┐"
    );
    println!(
        "│ Id      │ Name                             │ Status    │ Accuracy │ F1 Score │ Created    │"
    );
    println!(
        "├─────────┼──────────────────────────────────┼───────────┼──────────┼──────────┼────────────┤"
    );

    for exp in experiments {
        println!(
            "│ {:<7} │ {:<32} │ {:<9} │ {:<8} │ {:<8} │ {:<10} │",
            truncate(&exp.id, 7),
            truncate(&exp.name, 32),
            exp.status.as_str(),
            format!("{:.1}%", exp.accuracy),
            format!("{:.1}%", exp.f1_score),
            truncate(&exp.created, 10),
        );
    }

    println!(
        "└─────────┴──────────────────────────────────┴───────────┴──────────┴──────────┴────────────┘"
    );
}

/// Render a text progress bar like `[████████░░░░░░░░] 50%`.
///
/// `fraction` is clamped to `[0, 1]`.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = (fraction * width as f64).round() as usize;
    let filled = filled.min(width);
    format!(
        "[{}{}] {:.0}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        fraction * 100.0
    )
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) to safely handle UTF-8 strings
/// including emoji and multi-byte characters.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        // Safely truncate at character boundaries, not byte boundaries
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}

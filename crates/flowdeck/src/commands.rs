use clap::ArgMatches;
use tracing::{error, info, warn};

use flowdeck_core::config::FlowdeckConfig;
use flowdeck_core::events;
use flowdeck_core::{
    Command, CoreStore, Event, FlowCatalog, FlowError, MockDataProvider, SampleDataProvider, Store,
};

use crate::render;

pub fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("overview", sub_matches)) => handle_overview_command(sub_matches),
        Some(("metrics", sub_matches)) => handle_metrics_command(sub_matches),
        Some(("flows", sub_matches)) => handle_flows_command(sub_matches),
        Some(("show", sub_matches)) => handle_show_command(sub_matches),
        Some(("simulate", sub_matches)) => handle_simulate_command(sub_matches),
        Some(("fraud", sub_matches)) => handle_fraud_command(sub_matches),
        Some(("experiments", sub_matches)) => handle_experiments_command(sub_matches),
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> FlowdeckConfig {
    match FlowdeckConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.flowdeck/config.toml and ./.flowdeck/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            FlowdeckConfig::default()
        }
    }
}

fn handle_overview_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.overview_started", json_output = json_output);

    let config = load_config_with_warning();
    let mut store = CoreStore::new(config);
    store.dispatch(Command::RefreshMetrics { force: true })?;

    let mut provider = MockDataProvider::new();
    let components = provider.system_components();
    let activity = provider.recent_activity();
    let metrics = store.session().metrics.clone();

    if json_output {
        #[derive(serde::Serialize)]
        struct OverviewResponse {
            metrics: flowdeck_core::MetricsSnapshot,
            components: Vec<flowdeck_core::ComponentHealth>,
            activity: Vec<flowdeck_core::ActivityEntry>,
        }

        let response = OverviewResponse {
            metrics,
            components,
            activity,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        render::print_metrics(&metrics);

        println!();
        println!("🩺 System Components");
        for component in &components {
            println!(
                "   {} {:<16} uptime {:<8} response {}",
                component.status.icon(),
                component.name,
                component.uptime,
                component.response_time
            );
        }

        println!();
        println!("📋 Recent Activity");
        for entry in &activity {
            println!("   [{:<10}] {}", entry.time, entry.event);
        }
    }

    info!(event = "cli.overview_completed");
    Ok(())
}

fn handle_metrics_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");
    let watch_mode = matches.get_flag("watch");
    let interval_override = matches.get_one::<u64>("interval").copied();

    info!(
        event = "cli.metrics_started",
        json_output = json_output,
        watch_mode = watch_mode,
        interval = ?interval_override
    );

    let mut config = load_config_with_warning();
    if let Some(interval) = interval_override {
        if interval == 0 {
            eprintln!("❌ Refresh interval must be at least 1 second");
            error!(event = "cli.metrics_invalid_interval", interval = interval);
            return Err("Refresh interval must be at least 1 second".into());
        }
        config.metrics.refresh_interval_secs = Some(interval);
    }
    let interval = config.metrics.refresh_interval_secs();
    let mut store = CoreStore::new(config);

    if watch_mode {
        run_metrics_watch_loop(&mut store, interval, json_output)
    } else {
        store.dispatch(Command::RefreshMetrics { force: true })?;
        print_metrics_once(&store, json_output)?;
        info!(event = "cli.metrics_completed");
        Ok(())
    }
}

/// Poll once per second; the store's refresh check decides when the
/// snapshot is actually replaced.
fn run_metrics_watch_loop(
    store: &mut CoreStore,
    interval_secs: u64,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    use std::io::{self, Write};

    store.dispatch(Command::RefreshMetrics { force: true })?;
    print_metrics_once(store, json_output)?;
    if !json_output {
        println!(
            "\nRefreshing every {}s. Press Ctrl+C to exit.",
            interval_secs
        );
    }

    loop {
        std::thread::sleep(std::time::Duration::from_secs(1));

        let events = store.dispatch(Command::RefreshMetrics { force: false })?;

        if events.contains(&Event::MetricsRefreshed) {
            if !json_output {
                print!("\x1B[2J\x1B[1;1H");
                io::stdout().flush()?;
            }
            print_metrics_once(store, json_output)?;
            if !json_output {
                println!(
                    "\nRefreshing every {}s. Press Ctrl+C to exit.",
                    interval_secs
                );
            }
        }
    }
}

fn print_metrics_once(
    store: &CoreStore,
    json_output: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if json_output {
        println!(
            "{}",
            serde_json::to_string_pretty(&store.session().metrics)?
        );
    } else {
        render::print_metrics(&store.session().metrics);
        println!(
            "Last update: {}",
            store.session().last_update.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
    Ok(())
}

fn handle_flows_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.flows_started", json_output = json_output);

    let catalog = FlowCatalog::builtin();

    if json_output {
        println!("{}", serde_json::to_string_pretty(catalog.flows())?);
    } else {
        println!("Deployment flows:");
        let formatter = render::FlowTableFormatter::new(catalog.flows());
        formatter.print_table(catalog.flows());
    }

    info!(event = "cli.flows_completed", count = catalog.flows().len());
    Ok(())
}

fn handle_show_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let flow_id = matches
        .get_one::<String>("flow")
        .ok_or("Flow argument is required")?;
    let json_output = matches.get_flag("json");

    info!(event = "cli.show_started", flow_id = flow_id);

    let catalog = FlowCatalog::builtin();
    let flow = match catalog.get(flow_id) {
        Some(flow) => flow,
        None => {
            let e = FlowError::UnknownFlow {
                id: flow_id.clone(),
            };
            eprintln!("❌ {}", e);
            error!(event = "cli.show_failed", flow_id = flow_id, error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(flow)?);
    } else {
        println!("{} {}", flow.icon, flow.name);
        println!("   {}", flow.description);
        println!(
            "   Avg duration: {}  Success rate: {:.1}%  Complexity: {}",
            flow.stats.avg_duration, flow.stats.success_rate_pct, flow.stats.complexity
        );
        println!();
        for (i, step) in flow.steps.iter().enumerate() {
            render::print_step_card(step, i, flow.step_count());
        }
    }

    info!(event = "cli.show_completed", flow_id = flow_id);
    Ok(())
}

fn handle_simulate_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let flow_id = matches
        .get_one::<String>("flow")
        .ok_or("Flow argument is required")?;
    let json_output = matches.get_flag("json");
    let tick_delay_override = matches.get_one::<u64>("tick-delay").copied();

    let mut config = load_config_with_warning();
    if let Some(delay) = tick_delay_override {
        config.simulation.tick_delay_secs = Some(delay);
    }
    let tick_delay = config.simulation.tick_delay_secs();

    info!(
        event = "cli.simulate_started",
        flow_id = flow_id,
        tick_delay_secs = tick_delay
    );

    let mut store = CoreStore::new(config);

    let select_events = match store.dispatch(Command::SelectFlow {
        flow_id: flow_id.clone(),
    }) {
        Ok(events) => events,
        Err(e) => {
            eprintln!("❌ {}", e);
            error!(event = "cli.simulate_failed", flow_id = flow_id, error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };
    let start_events = store.dispatch(Command::StartSimulation)?;

    // The catalog outlives the store borrow below; clone what we render.
    let flow = store
        .catalog()
        .get(flow_id)
        .expect("selected flow exists in catalog")
        .clone();

    if json_output {
        for event in select_events.iter().chain(start_events.iter()) {
            println!("{}", serde_json::to_string(event)?);
        }
    } else {
        println!("{} Simulating: {}", flow.icon, flow.name);
        println!();
        render::print_step_card(&flow.steps[0], 0, flow.step_count());
        println!("   {}", render::progress_bar(store.progress(), 20));
    }

    loop {
        if tick_delay > 0 {
            std::thread::sleep(std::time::Duration::from_secs(tick_delay));
        }

        let events = store.dispatch(Command::Tick)?;
        let mut completed = false;

        for event in &events {
            if json_output {
                println!("{}", serde_json::to_string(event)?);
            }
            match event {
                Event::SimulationAdvanced { step_index } => {
                    if !json_output {
                        println!();
                        render::print_step_card(
                            &flow.steps[*step_index],
                            *step_index,
                            flow.step_count(),
                        );
                        println!("   {}", render::progress_bar(store.progress(), 20));
                    }
                }
                Event::SimulationCompleted { .. } | Event::TickIgnored => {
                    completed = true;
                }
                _ => {}
            }
        }

        if completed {
            break;
        }
    }

    if !json_output {
        println!();
        println!("✅ Deployment flow '{}' completed!", flow.name);
    }

    info!(
        event = "cli.simulate_completed",
        flow_id = flow_id,
        steps = flow.step_count()
    );
    Ok(())
}

fn handle_fraud_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let count = *matches.get_one::<usize>("count").unwrap_or(&20);
    let json_output = matches.get_flag("json");

    info!(
        event = "cli.fraud_started",
        count = count,
        json_output = json_output
    );

    let mut provider = MockDataProvider::new();
    let events = provider.fraud_events(count);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&events)?);
    } else {
        render::print_fraud_table(&events);
    }

    info!(event = "cli.fraud_completed", count = events.len());
    Ok(())
}

fn handle_experiments_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let json_output = matches.get_flag("json");

    info!(event = "cli.experiments_started", json_output = json_output);

    let mut provider = MockDataProvider::new();
    let experiments = provider.experiments();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&experiments)?);
    } else {
        render::print_experiments_table(&experiments);
    }

    info!(event = "cli.experiments_completed", count = experiments.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::build_cli;

    #[test]
    fn test_run_command_fraud_json() {
        let matches = build_cli()
            .try_get_matches_from(vec!["flowdeck", "fraud", "-n", "3", "--json"])
            .unwrap();
        assert!(run_command(&matches).is_ok());
    }

    #[test]
    fn test_run_command_flows() {
        let matches = build_cli()
            .try_get_matches_from(vec!["flowdeck", "flows", "--json"])
            .unwrap();
        assert!(run_command(&matches).is_ok());
    }

    #[test]
    fn test_run_command_show_unknown_flow_fails() {
        let matches = build_cli()
            .try_get_matches_from(vec!["flowdeck", "show", "flow99"])
            .unwrap();
        assert!(run_command(&matches).is_err());
    }

    #[test]
    fn test_run_command_simulate_instant() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "flowdeck",
                "simulate",
                "flow1",
                "--tick-delay",
                "0",
                "--json",
            ])
            .unwrap();
        assert!(run_command(&matches).is_ok());
    }

    #[test]
    fn test_run_command_simulate_unknown_flow_fails() {
        let matches = build_cli()
            .try_get_matches_from(vec![
                "flowdeck",
                "simulate",
                "bogus",
                "--tick-delay",
                "0",
            ])
            .unwrap();
        assert!(run_command(&matches).is_err());
    }

    #[test]
    fn test_run_command_experiments_json() {
        let matches = build_cli()
            .try_get_matches_from(vec!["flowdeck", "experiments", "--json"])
            .unwrap();
        assert!(run_command(&matches).is_ok());
    }
}

use clap::{Arg, ArgAction, ArgMatches, Command};

pub fn build_cli() -> Command {
    Command::new("flowdeck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Demo console for a seller-risk MLOps platform")
        .long_about(
            "flowdeck renders a fictitious seller-risk MLOps platform in the terminal: \
             live-looking platform metrics, a catalog of model deployment flows, and a \
             step-by-step deployment simulator. All data is synthetic; nothing connects \
             to a real system.",
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Suppress log output except errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("overview")
                .about("Show platform metrics, component health, and recent activity")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("metrics")
                .about("Show the current platform metrics snapshot")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("watch")
                        .long("watch")
                        .short('w')
                        .help("Continuously refresh the metrics display")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("interval")
                        .long("interval")
                        .short('i')
                        .help("Refresh interval in seconds (overrides config, default: 3)")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("flows")
                .about("List the available deployment flows")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Show the steps of a deployment flow")
                .arg(
                    Arg::new("flow")
                        .help("Flow id (e.g. flow1)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("simulate")
                .about("Run a deployment flow simulation step by step")
                .arg(
                    Arg::new("flow")
                        .help("Flow id to simulate (e.g. flow1)")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("tick-delay")
                        .long("tick-delay")
                        .help("Seconds between steps (overrides config, default: 2; 0 runs instantly)")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit dispatch events as JSON lines instead of step cards")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("fraud")
                .about("Show the fraud detection event feed")
                .arg(
                    Arg::new("count")
                        .long("count")
                        .short('n')
                        .help("Number of events to show (default: 20)")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("20"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("experiments")
                .about("Show recent training experiments")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Output in JSON format")
                        .action(ArgAction::SetTrue),
                ),
        )
}

#[allow(dead_code)]
pub fn get_matches() -> ArgMatches {
    build_cli().get_matches()
}

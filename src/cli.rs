use clap::{Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("nasa-api")
        .about("Query NASA and JPL open data APIs")
        .disable_version_flag(true)
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .num_args(1)
                .global(true)
                .help("Override RUST_LOG level (e.g., info, debug)"),
        )
        .arg(
            Arg::new("api-key")
                .long("api-key")
                .num_args(1)
                .global(true)
                .help("api.nasa.gov key (default: NASA_API_KEY, then DEMO_KEY)"),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .help("Print version and exit")
                .action(ArgAction::SetTrue),
        )
        .subcommand(Command::new("list").about("List endpoints and their parameters"))
        .subcommand(
            Command::new("call")
                .about("Call one endpoint and print the JSON result")
                .arg(Arg::new("endpoint").required(true).help("Endpoint name, see `list`"))
                .arg(
                    Arg::new("params")
                        .num_args(0..)
                        .value_name("NAME=VALUE")
                        .help("Parameters; values are read as JSON scalars, else as strings"),
                )
                .arg(
                    Arg::new("table")
                        .long("table")
                        .help("Print the tabular projection instead of the body")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("julian")
                .about("Print the Julian date")
                .arg(
                    Arg::new("date")
                        .long("date")
                        .num_args(1)
                        .help("YYYY-MM-DD or YYYY-MM-DDThh:mm:ss (default: now, UTC)"),
                )
                .arg(
                    Arg::new("absolute")
                        .long("absolute")
                        .help("Full Julian date instead of the modified one")
                        .action(ArgAction::SetTrue),
                ),
        )
}

pub fn init_logging(level: Option<&str>) {
    // Respect explicit level, else default to info, allow env override via RUST_LOG
    let env = env_logger::Env::default().default_filter_or(level.unwrap_or("info"));
    let mut builder = env_logger::Builder::from_env(env);
    if let Some(lvl) = level {
        builder.parse_filters(lvl);
    }
    builder.target(env_logger::Target::Stderr).init();
}

use clap::Parser;
use tracing::{error, info};

use headline_reactor::adapter::inbound::cli::command::{
    CheckCommand, Cli, ColorChoice, Commands,
};
use headline_reactor::adapter::inbound::cli::output::{self, OutputConfig};
use headline_reactor::adapter::inbound::cli::{band, check, config, session, suggest, watch};
use headline_reactor::error::Result;
use headline_reactor::infrastructure::config::logging::LoggingConfig;

/// Logging for the CLI: the configured level, raised by `-v` and lowered by `-q`.
fn init_logging(cli: &Cli, explicit: Option<&std::path::Path>) {
    let mut logging = config::load(explicit)
        .map(|c| c.logging)
        .unwrap_or_else(|_| LoggingConfig::default());
    logging.level = match (cli.quiet, cli.verbose) {
        (true, _) => "error".to_string(),
        (false, 0) => logging.level,
        (false, 1) => "debug".to_string(),
        (false, _) => "trace".to_string(),
    };
    logging.init();
}

fn config_arg(command: &Commands) -> Option<&std::path::Path> {
    match command {
        Commands::Suggest(args) => args.config.as_deref(),
        Commands::Watch(args) => args.config.as_deref(),
        Commands::Session(args) => args.config.as_deref(),
        Commands::Check(CheckCommand::Config(arg)) => arg.config.as_deref(),
        Commands::Band(_) => None,
    }
}

async fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Suggest(args) => suggest::execute(args),
        Commands::Watch(args) => watch::execute(args).await,
        Commands::Band(args) => band::execute(args),
        Commands::Session(args) => session::execute(args),
        Commands::Check(CheckCommand::Config(arg)) => check::execute_config(arg.config.as_deref()),
    }
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));
    init_logging(&cli, config_arg(&cli.command));
    info!("headline-reactor starting");

    if let Err(e) = dispatch(&cli).await {
        error!(error = %e, "Command failed");
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

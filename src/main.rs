use anyhow::Result;
use clap::Parser;

use outroute::cli::{Cli, Command};
use outroute::commands;
use outroute::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbose, cli.quiet);

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    tracing::debug!(?config, "Loaded configuration");

    let root = cli.root.as_deref();

    // Dispatch to subcommand
    match cli.command {
        Command::Resolve(args) => {
            tracing::info!(?args, "Resolving output directories");
            commands::resolve::run(args, root, &config)?;
        }
        Command::Clean(args) => {
            tracing::info!(?args, "Starting clean");
            commands::clean::run(args, root, &config)?;
        }
        Command::Mirrors(args) => {
            commands::mirrors::run(args, &config)?;
        }
        Command::Completions(args) => {
            commands::completions::run(args)?;
        }
    }

    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let level = if quiet {
        "warn"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("outroute={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

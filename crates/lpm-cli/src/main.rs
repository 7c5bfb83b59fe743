//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers which delegate to the core services.

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, warn};

use lpm_cli::{Cli, CliConfig, Commands, bootstrap, exit_code_for, handlers, init_logging};

fn main() -> ExitCode {
    // Load environment variables before parsing so env-backed flags see them
    let env_file = lpm_cli::load_env_file();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);
    match env_file {
        Ok(Some(path)) => debug!("Loaded environment from {}", path.display()),
        Ok(None) => {}
        Err(e) => warn!("Ignoring .env file: {e}"),
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Bootstrap the CLI context (composition root)
    let ctx = bootstrap(CliConfig::with_defaults());

    match cli.command {
        Commands::Buildpkg(args) => handlers::buildpkg::execute(&ctx, args)?,
    }

    Ok(())
}

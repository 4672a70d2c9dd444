//! # calib-config CLI
//!
//! Command-line entry point.
//!
//! Provides:
//! - Calibration file checks
//! - Camera intrinsics / topic / parameter / transform inspection

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use observability::ObservabilityConfig;
use tracing::debug;

use cli::{Cli, Commands};
use commands::{run_check, run_intrinsics, run_param, run_topics, run_transform};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    observability::init_with_config(ObservabilityConfig::from_verbosity(
        cli.verbose,
        cli.quiet,
        cli.log_format.into(),
    ))?;

    debug!(version = env!("CARGO_PKG_VERSION"), "calib-config starting");

    let result = match &cli.command {
        Commands::Check(args) => run_check(args),
        Commands::Intrinsics(args) => run_intrinsics(args),
        Commands::Topics(args) => run_topics(args),
        Commands::Param(args) => run_param(args),
        Commands::Transform(args) => run_transform(args),
    };

    if let Err(ref e) = result {
        tracing::error!(error = %e, "Command failed");
    }

    result
}

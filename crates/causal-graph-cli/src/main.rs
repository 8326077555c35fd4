//! Causal Graph CLI
//!
//! Backdoor path analysis for causal DAGs described as JSON.
//!
//! # Commands
//!
//! - `paths`: List backdoor paths between treatments and outcomes
//! - `adjust`: Compute an adjustment set closing every open backdoor path
//!
//! # Configuration
//!
//! Search settings come from an optional TOML file (`--config`) and then
//! `CAUSAL_GRAPH__*` environment variables, e.g.
//! `CAUSAL_GRAPH__MAX_PATHS=5000` or `CAUSAL_GRAPH__HITTING_SET=exact`.
//!
//! Exit code 0 on success, 1 on any failure.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod settings;

/// Causal Graph CLI - Backdoor Paths and Adjustment Sets
#[derive(Parser)]
#[command(name = "causal-graph-cli")]
#[command(version)]
#[command(about = "Backdoor path analysis and adjustment-set selection for causal DAGs")]
#[command(propagate_version = true)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Search configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List backdoor paths for every treatment/outcome pair
    Paths(commands::QueryArgs),
    /// Compute an adjustment set
    ///
    /// Collects the open backdoor paths of every treatment/outcome pair
    /// and picks variables that block all of them.
    Adjust(commands::adjust::AdjustArgs),
}

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();

    let config = match settings::load_search_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let exit_code = match cli.command {
        Commands::Paths(args) => commands::paths::handle_paths(args, config),
        Commands::Adjust(args) => commands::adjust::handle_adjust(args, config),
    };

    std::process::exit(exit_code);
}

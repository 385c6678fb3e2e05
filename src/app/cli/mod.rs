//! CLI Adapter.

mod init;
mod scenarios;
mod simulate;

use clap::{Parser, Subcommand};

use crate::app::logging::init_logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "civlab")]
#[command(version)]
#[command(
    about = "Explore how policy levers move GDP, inflation, and inequality",
    long_about = None
)]
struct Cli {
    /// Path to the configuration file (default: civlab.toml)
    #[arg(long, global = true)]
    config: Option<String>,
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write civlab.toml and the default scenario catalog
    #[clap(visible_alias = "i")]
    Init,
    /// List scenarios, or show one scenario's levers
    #[clap(visible_alias = "ls")]
    Scenarios {
        /// Scenario name
        name: Option<String>,
    },
    /// Compute outcomes for a scenario and request feedback
    #[clap(visible_alias = "sim")]
    Simulate(simulate::SimulateArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    let result: Result<(), AppError> = match cli.command {
        Commands::Init => init::run_init(),
        Commands::Scenarios { name } => scenarios::run_scenarios(name.as_deref(), config),
        Commands::Simulate(args) => simulate::run_simulate(args, config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

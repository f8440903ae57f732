//! sheets-mock CLI - replay scenarios against an in-memory spreadsheet service

mod scenario;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sheets_mock::{MockConfig, SheetsMock};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sheets-mock")]
#[command(
    author,
    version,
    about = "Replay spreadsheet scenarios against an in-memory service"
)]
struct Cli {
    /// Log each operation (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario file and print each result as JSON
    Run {
        /// Scenario file (JSON array of operations)
        scenario: PathBuf,

        /// Mock configuration file (JSON, default: built-in defaults)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the effective configuration
    ShowConfig {
        /// Mock configuration file to merge over the defaults
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run { scenario, config } => run(&scenario, config.as_deref()),
        Commands::ShowConfig { config } => show_config(config.as_deref()),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<MockConfig> {
    let Some(path) = path else {
        return Ok(MockConfig::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config '{}'", path.display()))?;
    let config: MockConfig = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse config '{}'", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config '{}'", path.display()))?;
    Ok(config)
}

fn run(scenario_path: &Path, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let operations = scenario::load(scenario_path)?;

    let mut mock = SheetsMock::with_config(config).context("Failed to create mock")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let count = scenario::run(&operations, &mut mock, &mut out)?;
    out.flush()?;

    tracing::info!("Ran {} operation(s) from '{}'", count, scenario_path.display());
    Ok(())
}

fn show_config(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

//! CLI Adapter.

mod check;
mod configs;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "slider-view")]
#[command(version)]
#[command(
    about = "Load Slider view-instance parameters from Ambari and check whether the view can be enabled",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch view parameters and validate the slider configs
    #[clap(visible_alias = "c")]
    Check {
        /// Settings file (defaults to ./slider-view.toml)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
        /// Validate configured values without contacting Ambari
        #[arg(long)]
        offline: bool,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the slider configs and their requirements
    #[clap(visible_alias = "ls")]
    Configs {
        /// Settings file (defaults to ./slider-view.toml)
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Check { config, offline, format } => check::run_check(config, offline, format),
        Commands::Configs { config } => configs::run_configs(config).map(|_| 0),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

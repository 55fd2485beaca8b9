use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod console;
mod error;

use error::CliResult;

#[derive(Parser)]
#[command(name = "raffle")]
#[command(about = "Interactive prize draws from CSV rosters")]
#[command(version)]
struct Cli {
    /// Configuration file (defaults to ./config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive draw until every prize is handed out (the default)
    Run {
        /// Prize order before the draw: shuffle, ascending or descending
        #[arg(short, long)]
        order: Option<String>,

        /// Skip pacing delays and enter-to-continue pauses
        #[arg(long)]
        fast: bool,
    },

    /// Create a default config file and sample work files
    Init {
        /// Overwrite files that already exist
        #[arg(long)]
        force: bool,
    },

    /// Validate the config file and the three work files
    Check,
}

fn main() -> CliResult<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config_path = cli
        .config
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));

    match cli.command.unwrap_or(Commands::Run {
        order: None,
        fast: false,
    }) {
        Commands::Run { order, fast } => commands::run_draw::execute(config_path, order, fast),

        Commands::Init { force } => commands::init_files::execute(config_path, force),

        Commands::Check => commands::check_files::execute(config_path),
    }
}

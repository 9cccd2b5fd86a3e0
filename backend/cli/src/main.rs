mod export_cmd;
mod input;
mod inspect_cmd;
mod settings;
mod terminal_output;
mod view_cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use priorart_config::{config_dir, config_file_path, load_and_prepare};
use priorart_logging::init_logger;
use priorart_markdown::Dialect;

use settings::Settings;
use terminal_output::note_warn;

#[derive(Parser)]
#[command(name = "priorart")]
#[command(about = "Render patent overlap analysis replies in the terminal or as standalone HTML")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ~/.priorart/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, overrides the config file
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save a reply as a self-contained HTML page
    Export {
        /// Reply file, or `-` for stdin
        input: String,
        /// Output file; `-` prints to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        dialect: Option<Dialect>,
    },
    /// Draw a reply in the terminal
    View {
        /// Reply file, or `-` for stdin
        input: String,
        #[arg(long)]
        dialect: Option<Dialect>,
        #[arg(long)]
        no_color: bool,
    },
    /// Print the parsed document as JSON
    Inspect {
        /// Reply file, or `-` for stdin
        input: String,
        #[arg(long)]
        dialect: Option<Dialect>,
        /// Lift a leading report title the way the export does
        #[arg(long)]
        titled: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| config_file_path(&config_dir()));
    let prepared = load_and_prepare(&config_path).await?;
    let mut settings = Settings::from_config(&prepared.config)?;
    if let Some(level) = cli.log_level {
        settings.log.level = level;
    }

    init_logger(&settings.log);
    for warning in &prepared.warnings {
        warn!(path = %warning.path, message = %warning.message, "Config warning");
        note_warn(&warning.to_string());
    }
    debug!(config = %config_path.display(), options = ?settings.options, "Settings resolved");

    match cli.command {
        Commands::Export { input, output, dialect } => {
            export_cmd::run(&settings.with_dialect(dialect), &input, output).await?;
        }
        Commands::View { input, dialect, no_color } => {
            view_cmd::run(&settings.with_dialect(dialect), &input, no_color).await?;
        }
        Commands::Inspect { input, dialect, titled } => {
            inspect_cmd::run(&settings.with_dialect(dialect), &input, titled).await?;
        }
    }

    Ok(())
}

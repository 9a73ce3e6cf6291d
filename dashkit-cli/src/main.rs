//! Dashkit - terminal admin shell with a calendar date field

use clap::Parser;
use dashkit_cli::error::{CliError, Result};
use dashkit_cli::tui::widgets::date_picker::{ExternalValue, InputVariant};
use dashkit_cli::tui::{self, App};
use dashkit_config::{config, writer, Config};
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "dashkit_cli=info,dashkit_config=info";

#[derive(Parser)]
#[command(name = "dashkit")]
#[command(about = "Terminal admin shell with a calendar date field")]
struct Cli {
    /// Config file (default: ~/.dashkit/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial value of the "Published at" field
    #[arg(long)]
    value: Option<String>,

    /// Seed "Published at" with the current local time as a structured value
    #[arg(long, conflicts_with = "value")]
    now: bool,

    /// Date field presentation: default or filter
    #[arg(long)]
    variant: Option<String>,

    /// Log file (default: ~/.dashkit/dashkit.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Write the default configuration and exit
    #[arg(long)]
    write_default_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.write_default_config {
        let defaults = dashkit_config::defaults::default_config();
        let path = match &cli.config {
            Some(path) => {
                writer::save_to_file(&defaults, path)?;
                path.clone()
            }
            None => writer::save_default(&defaults)?,
        };
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    // The TUI owns stdout, so logs go to a file
    let log_path = match cli.log_file {
        Some(path) => path,
        None => config::config_dir()?.join("dashkit.log"),
    };
    init_logging(&log_path)?;

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default()?,
    };

    let variant = match cli.variant.as_deref() {
        Some(name) => Some(InputVariant::from_str(name).ok_or_else(|| {
            CliError::InvalidArgument(format!("unknown variant {:?} (expected default or filter)", name))
        })?),
        None => None,
    };

    let value = if cli.now {
        ExternalValue::from(chrono::Local::now().naive_local())
    } else {
        ExternalValue::from(cli.value)
    };

    tracing::info!(log = %log_path.display(), "starting dashkit");
    let app = App::new(&config, value, variant)?;
    tui::run(app).await?;

    Ok(())
}

fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::options().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

//! dashkit-cli error types

use dashkit_config::ConfigError;
use thiserror::Error;

/// Terminal setup, drawing and teardown failures
#[derive(Debug, Error)]
pub enum TuiError {
    #[error("cannot prepare terminal: {0}")]
    TerminalInit(#[source] std::io::Error),

    #[error("cannot restore terminal: {0}")]
    TerminalRestore(#[source] std::io::Error),

    #[error("draw failed: {0}")]
    Render(#[source] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Everything `dashkit` can exit with
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Tui(#[from] TuiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot start logging: {0}")]
    Logging(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

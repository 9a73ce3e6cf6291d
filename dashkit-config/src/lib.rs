//! Configuration for the dashkit admin shell
//!
//! Reads `~/.dashkit/config.toml`: general options, sidebar layout, the date
//! picker's calendar options, the resources and pages the sidebar lists,
//! and per-context key bindings. Nothing here depends on the terminal UI.
//!
//! [`config`] loads files and merges user bindings over [`defaults`];
//! [`keybind`] turns the binding tables into a [`KeybindMap`] that resolves
//! key patterns to [`Action`]s.

pub mod actions;
pub mod config;
pub mod defaults;
pub mod keybind;
pub mod parser;
pub mod types;
pub mod writer;

pub use keybind::{BindingContext, KeyPattern, KeybindMap};
pub use types::Config;
pub use types::{
    Bindings, DatePickerConfig, Options, PageConfig, ResourceConfig, ShellConfig, UiConfig,
};

pub use actions::Action;

/// Failure to read, parse, validate or write a dashkit config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("config is not valid TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("cannot serialize config: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("bad key pattern: {0}")]
    KeyPattern(String),

    #[error("{0}")]
    Validation(String),

    #[error("no home directory to keep ~/.dashkit in")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

//! Configuration data structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Top-level configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global options (input devices, glyphs)
    #[serde(default)]
    pub options: Options,

    /// UI-specific settings
    #[serde(default)]
    pub ui: UiConfig,

    /// Date picker widget settings
    #[serde(default)]
    pub date_picker: DatePickerConfig,

    /// Sidebar shell contents
    #[serde(default)]
    pub shell: ShellConfig,

    /// All key bindings organized by context
    #[serde(default)]
    pub bindings: Bindings,
}

/// Global options for application behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Options {
    /// Enable mouse support (backdrop dismiss, day picking)
    #[serde(default = "default_true")]
    pub mouse_enabled: bool,

    /// Use Nerd Font glyphs instead of plain Unicode
    #[serde(default)]
    pub nerd_fonts: bool,
}

/// UI-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Sidebar width in characters
    #[serde(default = "default_sidebar_width")]
    pub sidebar_width: u16,

    /// Whether the sidebar is shown on startup
    #[serde(default = "default_true")]
    pub sidebar_visible: bool,
}

/// Date picker configuration
///
/// `variant` is cosmetic. Everything else is handed to the calendar surface
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatePickerConfig {
    /// Presentation variant of the text field ("default" or "filter")
    #[serde(default = "default_variant")]
    pub variant: String,

    /// First day of the calendar week ("sunday", "monday", ...)
    #[serde(default = "default_first_weekday")]
    pub first_weekday: String,

    /// Show the time row in the calendar
    #[serde(default)]
    pub show_time: bool,

    /// Minutes added or removed by one time step
    #[serde(default = "default_time_step")]
    pub time_step_minutes: u32,

    /// Earliest pickable day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<NaiveDate>,

    /// Latest pickable day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_date: Option<NaiveDate>,
}

/// Sidebar shell contents, already resolved by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    #[serde(default)]
    pub resources: Vec<ResourceConfig>,

    #[serde(default)]
    pub pages: Vec<PageConfig>,
}

/// A resource entry in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceConfig {
    pub id: String,
    pub name: String,
    /// Navigation group label; ungrouped resources sit at the top level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigation: Option<String>,
}

/// A custom page entry in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageConfig {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// All key bindings organized by context
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bindings {
    /// Global key bindings (checked last in every context)
    #[serde(default)]
    pub global: HashMap<String, String>,

    /// Sidebar navigation context
    #[serde(default)]
    pub sidebar: HashMap<String, String>,

    /// Record form context (any field focused)
    #[serde(default)]
    pub form: HashMap<String, String>,

    /// Date input field focused
    #[serde(default)]
    pub date_input: HashMap<String, String>,

    /// Date input focused with its calendar open
    #[serde(default)]
    pub calendar: HashMap<String, String>,
}

// Default value helper functions
fn default_true() -> bool {
    true
}

fn default_sidebar_width() -> u16 {
    28
}

fn default_variant() -> String {
    "default".to_string()
}

fn default_first_weekday() -> String {
    "sunday".to_string()
}

fn default_time_step() -> u32 {
    30
}

impl Default for Options {
    fn default() -> Self {
        Self {
            mouse_enabled: default_true(),
            nerd_fonts: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sidebar_width: default_sidebar_width(),
            sidebar_visible: default_true(),
        }
    }
}

impl Default for DatePickerConfig {
    fn default() -> Self {
        Self {
            variant: default_variant(),
            first_weekday: default_first_weekday(),
            show_time: false,
            time_step_minutes: default_time_step(),
            min_date: None,
            max_date: None,
        }
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        crate::defaults::default_shell()
    }
}

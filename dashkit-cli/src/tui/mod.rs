//! TUI module

mod app;
pub mod icons;
mod input;
pub mod layout;
pub mod state;
pub mod theme;
pub mod views;
pub mod widgets;

pub use app::{calendar_options, run, App, RecordForm};
pub use input::{handle_input_sync, handle_mouse_sync};

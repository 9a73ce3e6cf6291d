//! Dashkit terminal admin shell
//!
//! The reusable piece is [`tui::widgets::date_picker`], a controlled date
//! input with a pop-up calendar. The rest of the crate is the shell that
//! hosts it: a navigation sidebar, a record form and the event loop.

pub mod error;
pub mod tui;

//! Adapter layer between dashkit-config types and TUI input handling
//!
//! - Convert crossterm KeyEvent to a canonical key pattern string
//! - Detect the active BindingContexts from app state
//! - Map calendar actions onto calendar commands

use crate::tui::app::App;
use crate::tui::state::{Focus, FormField};
use crate::tui::widgets::date_picker::CalendarCommand;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use dashkit_config::{Action, BindingContext};

/// Convert a crossterm KeyEvent to the canonical pattern string used as
/// keybind map key ("S-C-A-" modifier order)
pub fn key_event_to_pattern_string(key: KeyEvent) -> Option<String> {
    let mut modifiers = Vec::new();

    // Uppercase letters already carry Shift in the character
    let is_uppercase_letter = matches!(key.code, KeyCode::Char(c) if c.is_ascii_uppercase());

    if key.code == KeyCode::BackTab
        || (key.modifiers.contains(KeyModifiers::SHIFT) && !is_uppercase_letter)
    {
        modifiers.push("S");
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        modifiers.push("C");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        modifiers.push("A");
    }

    let key_str = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) if c.is_ascii_alphanumeric() || c.is_ascii_punctuation() => {
            c.to_string()
        }
        KeyCode::Char(_) => return None,
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => return None,
    };

    if modifiers.is_empty() {
        Some(key_str)
    } else {
        Some(format!("{}-{}", modifiers.join("-"), key_str))
    }
}

/// Contexts to try, most specific first; global is always tried last
pub fn detect_contexts(app: &App) -> Vec<BindingContext> {
    match app.focus {
        Focus::Sidebar => vec![BindingContext::Sidebar],
        Focus::Field(FormField::Title) => vec![BindingContext::Form],
        Focus::Field(field) => {
            let open = app.form.picker(field).is_some_and(|p| p.is_open());
            if open {
                vec![
                    BindingContext::Calendar,
                    BindingContext::DateInput,
                    BindingContext::Form,
                ]
            } else {
                vec![BindingContext::DateInput, BindingContext::Form]
            }
        }
    }
}

/// Resolve a key event to an action in the current contexts
pub fn resolve_action(app: &App, key: KeyEvent) -> Option<Action> {
    let pattern = key_event_to_pattern_string(key)?;
    app.keybinds.resolve_in(&pattern, &detect_contexts(app))
}

pub fn calendar_command(action: Action) -> Option<CalendarCommand> {
    let command = match action {
        Action::CalendarPrevDay => CalendarCommand::PrevDay,
        Action::CalendarNextDay => CalendarCommand::NextDay,
        Action::CalendarPrevWeek => CalendarCommand::PrevWeek,
        Action::CalendarNextWeek => CalendarCommand::NextWeek,
        Action::CalendarPrevMonth => CalendarCommand::PrevMonth,
        Action::CalendarNextMonth => CalendarCommand::NextMonth,
        Action::CalendarTimeForward => CalendarCommand::TimeForward,
        Action::CalendarTimeBack => CalendarCommand::TimeBack,
        Action::CalendarPick => CalendarCommand::Pick,
        _ => return None,
    };
    Some(command)
}

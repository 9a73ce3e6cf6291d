//! Bound action execution and focus changes

use super::App;
use crate::tui::input::resolver::calendar_command;
use crate::tui::state::{Focus, FormField, Selection};
use crate::tui::views::sidebar::handle_sidebar_action;
use crate::tui::widgets::date_picker::DatePickerResult;
use crate::tui::widgets::text_input::handle_text_input;
use crossterm::event::KeyEvent;
use dashkit_config::Action;

impl App {
    /// Move focus; entering a date field counts as focusing its input
    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus == focus {
            return;
        }
        self.focus = focus;
        if let Focus::Field(field) = focus {
            if let Some(picker) = self.form.picker_mut(field) {
                picker.focus();
            }
        }
    }

    /// Show a resource or page in the main pane
    pub fn select(&mut self, selection: Selection) {
        self.current = Some(selection);
        if let Some(name) = self.sidebar.selection_name(selection) {
            tracing::info!(%name, "selected");
        }
    }

    /// Hand a picker's result to the form; true when the event was consumed
    pub fn apply_picker_result(&mut self, field: FormField, result: DatePickerResult) -> bool {
        let handled = result.is_handled();
        if let DatePickerResult::Change(text) = result {
            tracing::debug!(field = field.label(), %text, "date field changed");
            self.status_message = Some(if text.is_empty() {
                format!("{} cleared", field.label())
            } else {
                format!("{} = {}", field.label(), text)
            });
            self.form.commit(field, text);
        }
        handled
    }

    /// Execute a bound action; false lets the key fall through to the
    /// focused field
    pub fn execute_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Noop => {}
            Action::ToggleSidebar => {
                self.sidebar.toggle_visible();
                if !self.sidebar.visible && self.focus == Focus::Sidebar {
                    self.set_focus(Focus::Field(FormField::Title));
                }
            }
            Action::FocusSidebar => {
                if !self.sidebar.visible {
                    return false;
                }
                self.set_focus(Focus::Sidebar);
            }
            Action::FocusForm => self.set_focus(Focus::Field(FormField::Title)),
            Action::FocusNext => self.set_focus(self.focus.next(self.sidebar.visible)),
            Action::FocusPrev => self.set_focus(self.focus.prev(self.sidebar.visible)),
            Action::MoveUp
            | Action::MoveDown
            | Action::GotoTop
            | Action::GotoBottom
            | Action::Select => return handle_sidebar_action(self, action),
            Action::ToggleCalendar => {
                let Focus::Field(field) = self.focus else {
                    return false;
                };
                let Some(picker) = self.form.picker_mut(field) else {
                    return false;
                };
                picker.toggle();
            }
            Action::CalendarPrevDay
            | Action::CalendarNextDay
            | Action::CalendarPrevWeek
            | Action::CalendarNextWeek
            | Action::CalendarPrevMonth
            | Action::CalendarNextMonth
            | Action::CalendarTimeForward
            | Action::CalendarTimeBack
            | Action::CalendarPick => {
                let Focus::Field(field) = self.focus else {
                    return false;
                };
                let (Some(command), Some(picker)) =
                    (calendar_command(action), self.form.picker_mut(field))
                else {
                    return false;
                };
                let result = picker.apply(command);
                return self.apply_picker_result(field, result);
            }
        }
        true
    }

    /// Keys no binding claimed go to the focused field
    pub fn handle_focused_key(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::Sidebar => {}
            Focus::Field(FormField::Title) => {
                handle_text_input(&key, &mut self.form.title);
            }
            Focus::Field(field) => {
                if let Some(picker) = self.form.picker_mut(field) {
                    let result = picker.handle_text_key(&key);
                    self.apply_picker_result(field, result);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::date_picker::{ExternalValue, OverlayState};
    use dashkit_config::defaults::default_config;

    fn app() -> App {
        App::new(
            &default_config(),
            ExternalValue::from_text("2024-03-05 09:00"),
            None,
        )
        .unwrap()
    }

    fn picker_state(app: &App, field: FormField) -> OverlayState {
        app.form.picker(field).unwrap().state()
    }

    #[test]
    fn test_tab_into_date_field_opens_calendar() {
        let mut app = app();
        app.execute_action(Action::FocusNext);
        assert_eq!(app.focus, Focus::Field(FormField::Title));
        app.execute_action(Action::FocusNext);
        assert_eq!(picker_state(&app, FormField::PublishedAt), OverlayState::Open);
    }

    #[test]
    fn test_calendar_pick_commits_to_form() {
        let mut app = app();
        app.set_focus(Focus::Field(FormField::PublishedAt));
        assert!(app.execute_action(Action::CalendarNextDay));
        assert!(app.execute_action(Action::CalendarPick));
        assert_eq!(
            app.form.value(FormField::PublishedAt),
            Some(&ExternalValue::RawText("2024-03-06 09:00".to_string()))
        );
        assert_eq!(picker_state(&app, FormField::PublishedAt), OverlayState::Closed);
        assert_eq!(
            app.status_message.as_deref(),
            Some("Published at = 2024-03-06 09:00")
        );
    }

    #[test]
    fn test_calendar_actions_need_open_picker() {
        let mut app = app();
        assert!(!app.execute_action(Action::CalendarPick));
        app.set_focus(Focus::Field(FormField::Title));
        assert!(!app.execute_action(Action::ToggleCalendar));
    }

    #[test]
    fn test_hiding_sidebar_moves_focus() {
        let mut app = app();
        assert_eq!(app.focus, Focus::Sidebar);
        app.execute_action(Action::ToggleSidebar);
        assert_eq!(app.focus, Focus::Field(FormField::Title));
        assert!(!app.execute_action(Action::FocusSidebar));
    }

    #[test]
    fn test_focus_sidebar_leaves_calendar_open() {
        let mut app = app();
        app.set_focus(Focus::Field(FormField::PublishedAt));
        app.execute_action(Action::FocusSidebar);
        assert_eq!(picker_state(&app, FormField::PublishedAt), OverlayState::Open);
    }
}

//! Date input with a pop-up calendar
//!
//! A [`DatePicker`] is a controlled field: the owner hands it an
//! [`ExternalValue`] through [`DatePicker::set_value`] and gets edits back as
//! [`DatePickerResult::Change`] carrying the new text. Typing and calendar
//! picks both report through that one channel, at most once per event.

mod calendar;
mod overlay;
mod render;
mod value;

pub use calendar::{CalendarCommand, CalendarOptions, CalendarSurface};
pub use overlay::{Backdrop, CloseReason, OverlayController, OverlaySession, OverlayState};
pub use render::{
    calendar_height, draw_calendar, draw_date_field, CalendarHit, DatePickerLayout,
    CALENDAR_WIDTH, FIELD_HEIGHT,
};
pub use value::{
    format_canonical, parse_loose, reconcile, ExternalValue, Reconciled, SelectedDate,
};

use super::text_input::{handle_text_input, TextInput, TextInputResult};
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

/// Presentation variant of the input; behavior is identical
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputVariant {
    #[default]
    Default,
    /// Compact look used in list filters
    Filter,
}

impl InputVariant {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "default" => Some(InputVariant::Default),
            "filter" => Some(InputVariant::Filter),
            _ => None,
        }
    }
}

/// Result of routing an event to a date picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatePickerResult {
    /// The field's text changed; the owner should store it
    Change(String),
    /// Consumed without a value change
    Handled,
    /// Not for this picker
    Unhandled,
}

impl DatePickerResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, DatePickerResult::Unhandled)
    }
}

#[derive(Debug, Default)]
pub struct DatePicker {
    variant: InputVariant,
    options: CalendarOptions,
    input: TextInput,
    date_value: Option<SelectedDate>,
    overlay: OverlayController,
}

impl DatePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant(mut self, variant: InputVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_options(mut self, options: CalendarOptions) -> Self {
        self.options = options;
        self
    }

    pub fn variant(&self) -> InputVariant {
        self.variant
    }

    pub fn options(&self) -> &CalendarOptions {
        &self.options
    }

    /// Reconcile the owner's value into the field
    ///
    /// The input text is replaced only when it differs, so re-supplying what
    /// the user just typed keeps the cursor in place. Open or closed stays as
    /// it was; an open calendar follows the new selection.
    pub fn set_value(&mut self, value: &ExternalValue) {
        let reconciled = reconcile(value);
        if self.input.content() != reconciled.display_text() {
            self.input.set_content(reconciled.display_text());
        }
        if reconciled.date_value != self.date_value {
            if let Some(session) = self.overlay.session_mut() {
                session.calendar_mut().reseed(reconciled.date_value);
            }
        }
        self.date_value = reconciled.date_value;
    }

    pub fn text(&self) -> &str {
        self.input.content()
    }

    pub fn input(&self) -> &TextInput {
        &self.input
    }

    /// Calendar selection derived from the last reconciled value
    pub fn date_value(&self) -> Option<SelectedDate> {
        self.date_value
    }

    pub fn state(&self) -> OverlayState {
        self.overlay.state()
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn calendar(&self) -> Option<&CalendarSurface> {
        self.overlay.session().map(OverlaySession::calendar)
    }

    pub fn backdrop(&self) -> Option<&Backdrop> {
        self.overlay.session().map(OverlaySession::backdrop)
    }

    /// The input gained focus: open, or stay open
    pub fn focus(&mut self) -> bool {
        self.open()
    }

    /// Toggle control activated
    pub fn toggle(&mut self) {
        if self.overlay.close(CloseReason::Toggle).is_none() {
            self.open();
        }
    }

    /// Backdrop pressed; returns whether anything closed
    pub fn dismiss(&mut self) -> bool {
        self.overlay.close(CloseReason::Backdrop).is_some()
    }

    fn open(&mut self) -> bool {
        let seed = self.date_value;
        let options = self.options.clone();
        self.overlay
            .open_with(|| CalendarSurface::new(seed, options, Local::now().date_naive()))
    }

    /// Edit the text directly
    ///
    /// Reports a change only when the text actually changed. Enter, Esc and
    /// unbound chords come back as Unhandled for the caller's bindings.
    pub fn handle_text_key(&mut self, key: &KeyEvent) -> DatePickerResult {
        match handle_text_input(key, &mut self.input) {
            TextInputResult::Edited => DatePickerResult::Change(self.input.content().to_string()),
            TextInputResult::Moved => DatePickerResult::Handled,
            TextInputResult::Submit | TextInputResult::Cancel | TextInputResult::Unhandled => {
                DatePickerResult::Unhandled
            }
        }
    }

    /// Drive the open calendar from the keyboard
    pub fn apply(&mut self, command: CalendarCommand) -> DatePickerResult {
        let Some(session) = self.overlay.session_mut() else {
            return DatePickerResult::Unhandled;
        };
        if session.calendar_mut().navigate(command) {
            return DatePickerResult::Handled;
        }
        let cursor = session.calendar().cursor();
        self.pick(cursor)
    }

    /// Commit a calendar day
    ///
    /// The canonical text goes into the input right away and the overlay
    /// closes. Disabled days are absorbed without closing.
    pub fn pick(&mut self, date: NaiveDate) -> DatePickerResult {
        let Some(session) = self.overlay.session() else {
            return DatePickerResult::Unhandled;
        };
        let Some(picked) = session.calendar().pick(date) else {
            tracing::debug!(%date, "ignoring pick outside the allowed range");
            return DatePickerResult::Handled;
        };

        let value = format_canonical(&picked);
        self.overlay.close(CloseReason::Pick);
        self.date_value = Some(picked);
        self.input.set_content(value.clone());
        tracing::debug!(%value, "calendar pick");
        DatePickerResult::Change(value)
    }

    /// Route a pointer press
    ///
    /// Input and toggle sit above the backdrop. While open, any press
    /// outside the picker is swallowed by the backdrop and closes it.
    pub fn handle_mouse(&mut self, mouse: &MouseEvent, layout: &DatePickerLayout) -> DatePickerResult {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return DatePickerResult::Unhandled;
        }
        let pos = Position::new(mouse.column, mouse.row);

        if layout.toggle.contains(pos) {
            self.toggle();
            return DatePickerResult::Handled;
        }
        if layout.input.contains(pos) {
            self.focus();
            return DatePickerResult::Handled;
        }

        let Some(session) = self.overlay.session_mut() else {
            return DatePickerResult::Unhandled;
        };
        let command = match layout.calendar_hit(pos, session.calendar()) {
            Some(CalendarHit::Day(date)) => return self.pick(date),
            Some(CalendarHit::PrevMonth) => CalendarCommand::PrevMonth,
            Some(CalendarHit::NextMonth) => CalendarCommand::NextMonth,
            Some(CalendarHit::TimeBack) => CalendarCommand::TimeBack,
            Some(CalendarHit::TimeForward) => CalendarCommand::TimeForward,
            Some(CalendarHit::Chrome) => return DatePickerResult::Handled,
            None => {
                if session.backdrop().catches(pos, &layout.raised()) {
                    self.dismiss();
                }
                return DatePickerResult::Handled;
            }
        };
        session.calendar_mut().navigate(command);
        DatePickerResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    fn layout() -> DatePickerLayout {
        DatePickerLayout::compute(Rect::new(30, 5, 40, 3), Rect::new(0, 0, 100, 40), false)
    }

    fn picker_with(text: &str) -> DatePicker {
        let mut picker = DatePicker::new();
        picker.set_value(&ExternalValue::from_text(text));
        picker
    }

    #[test]
    fn test_set_value_keeps_cursor_when_text_matches() {
        let mut picker = picker_with("2024-03-05 09:00");
        picker.input.move_home();
        picker.set_value(&ExternalValue::from_text("2024-03-05 09:00"));
        assert_eq!(picker.input().cursor_position(), 0);

        picker.set_value(&ExternalValue::from_text("2024-03-06 09:00"));
        assert_eq!(picker.text(), "2024-03-06 09:00");
        assert_eq!(picker.date_value(), Some(SelectedDate::new(2024, 3, 6, 9, 0)));
    }

    #[test]
    fn test_set_value_keeps_overlay_open_and_reseeds() {
        let mut picker = picker_with("");
        picker.focus();
        picker.set_value(&ExternalValue::from_text("2024-03-05 09:00"));
        assert!(picker.is_open());
        let calendar = picker.calendar().unwrap();
        assert_eq!(calendar.selected(), Some(SelectedDate::new(2024, 3, 5, 9, 0)));
        assert_eq!(calendar.cursor(), NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(calendar.time(), (9, 0));
    }

    #[test]
    fn test_typed_bracket_reports_change_while_open() {
        let mut picker = picker_with("2024");
        picker.focus();
        let result = picker.handle_text_key(&KeyEvent::new(KeyCode::Char('['), KeyModifiers::empty()));
        assert_eq!(result, DatePickerResult::Change("2024[".to_string()));
        assert!(picker.is_open());
    }

    #[test]
    fn test_typing_reports_each_edit() {
        let mut picker = picker_with("2024-03-0");
        assert_eq!(
            picker.handle_text_key(&key(KeyCode::Char('5'))),
            DatePickerResult::Change("2024-03-05".to_string())
        );
        assert_eq!(picker.handle_text_key(&key(KeyCode::Left)), DatePickerResult::Handled);
        assert_eq!(picker.handle_text_key(&key(KeyCode::Enter)), DatePickerResult::Unhandled);
    }

    #[test]
    fn test_toggle_cycle() {
        let mut picker = DatePicker::new();
        picker.toggle();
        assert_eq!(picker.state(), OverlayState::Open);
        assert!(picker.backdrop().is_some());
        picker.toggle();
        assert_eq!(picker.state(), OverlayState::Closed);
        assert!(picker.backdrop().is_none());
    }

    #[test]
    fn test_focus_while_open_keeps_calendar() {
        let mut picker = picker_with("2024-03-05 09:00");
        picker.focus();
        picker.apply(CalendarCommand::NextDay);
        assert!(!picker.focus());
        assert_eq!(
            picker.calendar().unwrap().cursor(),
            NaiveDate::from_ymd_opt(2024, 3, 6).unwrap()
        );
    }

    #[test]
    fn test_pick_sets_text_and_closes() {
        let mut picker = picker_with("2024-03-05 09:00");
        picker.focus();
        picker.apply(CalendarCommand::NextWeek);
        let result = picker.apply(CalendarCommand::Pick);
        assert_eq!(result, DatePickerResult::Change("2024-03-12 09:00".to_string()));
        assert_eq!(picker.text(), "2024-03-12 09:00");
        assert!(!picker.is_open());
    }

    #[test]
    fn test_commands_while_closed_are_unhandled() {
        let mut picker = DatePicker::new();
        assert_eq!(picker.apply(CalendarCommand::NextDay), DatePickerResult::Unhandled);
        assert_eq!(
            picker.pick(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            DatePickerResult::Unhandled
        );
    }

    #[test]
    fn test_disabled_day_is_absorbed() {
        let options = CalendarOptions {
            max_date: NaiveDate::from_ymd_opt(2024, 3, 10),
            ..CalendarOptions::default()
        };
        let mut picker = DatePicker::new().with_options(options);
        picker.set_value(&ExternalValue::from_text("2024-03-05 09:00"));
        picker.focus();
        let result = picker.pick(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap());
        assert_eq!(result, DatePickerResult::Handled);
        assert!(picker.is_open());
        assert_eq!(picker.text(), "2024-03-05 09:00");
    }

    #[test]
    fn test_mouse_backdrop_dismisses() {
        let mut picker = DatePicker::new();
        let layout = layout();
        assert_eq!(picker.handle_mouse(&click(1, 1), &layout), DatePickerResult::Unhandled);

        picker.handle_mouse(&click(35, 6), &layout);
        assert!(picker.is_open());
        assert_eq!(picker.handle_mouse(&click(1, 1), &layout), DatePickerResult::Handled);
        assert!(!picker.is_open());
    }

    #[test]
    fn test_mouse_toggle_and_chrome() {
        let mut picker = DatePicker::new();
        let layout = layout();
        picker.handle_mouse(&click(67, 6), &layout);
        assert!(picker.is_open());
        // Border of the popup is part of the calendar, not the backdrop
        picker.handle_mouse(&click(layout.calendar.x, layout.calendar.y), &layout);
        assert!(picker.is_open());
        picker.handle_mouse(&click(67, 6), &layout);
        assert!(!picker.is_open());
    }

    #[test]
    fn test_mouse_day_pick() {
        let mut picker = picker_with("2024-03-05 09:00");
        let layout = layout();
        picker.focus();
        // Calendar inner area starts one cell in; second week, Tuesday
        let x = layout.calendar.x + 1 + 2 * 3;
        let y = layout.calendar.y + 1 + 3;
        assert_eq!(
            picker.handle_mouse(&click(x, y), &layout),
            DatePickerResult::Change("2024-03-05 09:00".to_string())
        );
        assert!(!picker.is_open());
    }

    #[test]
    fn test_variant_parse() {
        assert_eq!(InputVariant::from_str("Filter"), Some(InputVariant::Filter));
        assert_eq!(InputVariant::from_str("default"), Some(InputVariant::Default));
        assert_eq!(InputVariant::from_str("neon"), None);
    }
}

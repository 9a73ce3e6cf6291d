//! Action definitions and parsing
//!
//! An Action represents a bindable command that can be executed when a key is pressed.
//! This decouples key codes from actions, allowing users to customize keybindings.

/// All bindable actions in dashkit
///
/// The actual execution is done in the TUI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Shell
    ToggleSidebar,
    FocusSidebar,
    FocusForm,
    FocusNext,
    FocusPrev,

    // Movement (sidebar)
    MoveUp,
    MoveDown,
    GotoTop,
    GotoBottom,
    Select,

    // Date input
    ToggleCalendar,

    // Calendar surface
    CalendarPrevDay,
    CalendarNextDay,
    CalendarPrevWeek,
    CalendarNextWeek,
    CalendarPrevMonth,
    CalendarNextMonth,
    CalendarTimeForward,
    CalendarTimeBack,
    CalendarPick,

    // General
    Quit,

    // Special
    Noop,
}

impl Action {
    #[allow(clippy::should_implement_trait)]
    /// Parse action from string (case-insensitive, supports aliases)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "toggle-sidebar" => Some(Action::ToggleSidebar),
            "focus-sidebar" => Some(Action::FocusSidebar),
            "focus-form" => Some(Action::FocusForm),
            "focus-next" => Some(Action::FocusNext),
            "focus-prev" | "focus-previous" => Some(Action::FocusPrev),

            "move-up" | "up" => Some(Action::MoveUp),
            "move-down" | "down" => Some(Action::MoveDown),
            "goto-top" | "top" => Some(Action::GotoTop),
            "goto-bottom" | "bottom" => Some(Action::GotoBottom),
            "select" => Some(Action::Select),

            "toggle-calendar" => Some(Action::ToggleCalendar),

            "calendar-prev-day" => Some(Action::CalendarPrevDay),
            "calendar-next-day" => Some(Action::CalendarNextDay),
            "calendar-prev-week" => Some(Action::CalendarPrevWeek),
            "calendar-next-week" => Some(Action::CalendarNextWeek),
            "calendar-prev-month" => Some(Action::CalendarPrevMonth),
            "calendar-next-month" => Some(Action::CalendarNextMonth),
            "calendar-time-forward" => Some(Action::CalendarTimeForward),
            "calendar-time-back" => Some(Action::CalendarTimeBack),
            "calendar-pick" | "pick" => Some(Action::CalendarPick),

            "quit" | "exit" => Some(Action::Quit),
            "noop" | "none" => Some(Action::Noop),
            _ => None,
        }
    }

    /// Canonical config name for this action
    pub fn name(&self) -> &'static str {
        match self {
            Action::ToggleSidebar => "toggle-sidebar",
            Action::FocusSidebar => "focus-sidebar",
            Action::FocusForm => "focus-form",
            Action::FocusNext => "focus-next",
            Action::FocusPrev => "focus-prev",
            Action::MoveUp => "move-up",
            Action::MoveDown => "move-down",
            Action::GotoTop => "goto-top",
            Action::GotoBottom => "goto-bottom",
            Action::Select => "select",
            Action::ToggleCalendar => "toggle-calendar",
            Action::CalendarPrevDay => "calendar-prev-day",
            Action::CalendarNextDay => "calendar-next-day",
            Action::CalendarPrevWeek => "calendar-prev-week",
            Action::CalendarNextWeek => "calendar-next-week",
            Action::CalendarPrevMonth => "calendar-prev-month",
            Action::CalendarNextMonth => "calendar-next-month",
            Action::CalendarTimeForward => "calendar-time-forward",
            Action::CalendarTimeBack => "calendar-time-back",
            Action::CalendarPick => "calendar-pick",
            Action::Quit => "quit",
            Action::Noop => "noop",
        }
    }

    /// Whether this action drives the calendar surface
    pub fn is_calendar(&self) -> bool {
        matches!(
            self,
            Action::CalendarPrevDay
                | Action::CalendarNextDay
                | Action::CalendarPrevWeek
                | Action::CalendarNextWeek
                | Action::CalendarPrevMonth
                | Action::CalendarNextMonth
                | Action::CalendarTimeForward
                | Action::CalendarTimeBack
                | Action::CalendarPick
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Action::from_str("pick"), Some(Action::CalendarPick));
        assert_eq!(Action::from_str(" Quit "), Some(Action::Quit));
        assert_eq!(Action::from_str("focus-previous"), Some(Action::FocusPrev));
        assert_eq!(Action::from_str("launch-rockets"), None);
    }

    #[test]
    fn test_name_parses_back() {
        for action in [
            Action::ToggleSidebar,
            Action::ToggleCalendar,
            Action::CalendarNextMonth,
            Action::CalendarTimeBack,
            Action::Select,
        ] {
            assert_eq!(Action::from_str(action.name()), Some(action));
        }
    }

    #[test]
    fn test_is_calendar() {
        assert!(Action::CalendarPick.is_calendar());
        assert!(!Action::ToggleCalendar.is_calendar());
    }
}

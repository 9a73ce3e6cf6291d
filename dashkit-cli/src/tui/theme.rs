//! Catppuccin Mocha theme for the dashkit TUI
//!
//! Palette reference: https://catppuccin.com/palette/

use ratatui::style::{Color, Modifier, Style};

/// Catppuccin Mocha color theme
#[derive(Debug, Clone)]
pub struct MochaTheme {
    pub accent: Color,
    pub accent_alt: Color,

    // UI semantic colors
    pub focus_border: Color,
    pub unfocus_border: Color,
    pub filter_border: Color,
    pub selection_fg: Color,
    pub selection_bg: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,

    // Calendar
    pub calendar_today: Color,
    pub calendar_selected_fg: Color,
    pub calendar_selected_bg: Color,
    pub calendar_cursor_bg: Color,

    // Background
    pub bg_level0: Color,
    pub bg_level1: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_tertiary: Color,
    pub text_disabled: Color,
}

impl Default for MochaTheme {
    fn default() -> Self {
        Self::mocha()
    }
}

impl MochaTheme {
    pub fn mocha() -> Self {
        Self {
            accent: Color::Rgb(137, 180, 250),     // Blue #89b4fa
            accent_alt: Color::Rgb(203, 166, 247), // Mauve #cba6f7

            focus_border: Color::Rgb(180, 190, 254),  // Lavender #b4befe
            unfocus_border: Color::Rgb(88, 91, 112),  // Surface 2 #585b70
            filter_border: Color::Rgb(148, 226, 213), // Teal #94e2d5
            selection_fg: Color::Rgb(205, 214, 244),  // Text #cdd6f4
            selection_bg: Color::Rgb(49, 50, 68),     // Surface 0 #313244

            success: Color::Rgb(166, 227, 161), // Green #a6e3a1
            warning: Color::Rgb(249, 226, 175), // Yellow #f9e2af

            calendar_today: Color::Rgb(250, 179, 135), // Peach #fab387
            calendar_selected_fg: Color::Rgb(30, 30, 46), // Base #1e1e2e
            calendar_selected_bg: Color::Rgb(137, 180, 250), // Blue #89b4fa
            calendar_cursor_bg: Color::Rgb(69, 71, 90), // Surface 1 #45475a

            bg_level0: Color::Rgb(30, 30, 46), // Base #1e1e2e
            bg_level1: Color::Rgb(24, 24, 37), // Mantle #181825

            text_primary: Color::Rgb(205, 214, 244), // Text #cdd6f4
            text_secondary: Color::Rgb(186, 194, 222), // Subtext 1 #bac2de
            text_tertiary: Color::Rgb(127, 132, 156), // Overlay 1 #7f849c
            text_disabled: Color::Rgb(108, 112, 134), // Overlay 0 #6c7086
        }
    }

    // ========== Style Helpers ==========

    /// Style for focused panel border
    pub fn focused_border_style(&self) -> Style {
        Style::default()
            .fg(self.focus_border)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for unfocused panel border
    pub fn unfocused_border_style(&self) -> Style {
        Style::default().fg(self.unfocus_border)
    }

    /// Style for selected item (cursor on it, panel focused)
    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.selection_fg)
            .bg(self.selection_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for selected item when panel is not focused
    pub fn selection_unfocused_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for normal (non-selected) items
    pub fn normal_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Group headings and section labels
    pub fn heading_style(&self) -> Style {
        Style::default()
            .fg(self.text_tertiary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn placeholder_style(&self) -> Style {
        Style::default()
            .fg(self.text_disabled)
            .add_modifier(Modifier::ITALIC)
    }

    // ========== Date Field Styles ==========

    /// Border for a date field; the filter variant keeps its own color
    pub fn field_border_style(&self, filter: bool, focused: bool, open: bool) -> Style {
        if open {
            return Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD);
        }
        match (filter, focused) {
            (false, true) => self.focused_border_style(),
            (false, false) => self.unfocused_border_style(),
            (true, true) => Style::default()
                .fg(self.filter_border)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(self.filter_border),
        }
    }

    // ========== Calendar Styles ==========

    pub fn calendar_day_style(&self, day: DayStyle) -> Style {
        let base = if day.in_month {
            Style::default().fg(self.text_primary)
        } else {
            Style::default().fg(self.text_tertiary)
        };

        let base = if !day.enabled {
            Style::default()
                .fg(self.text_disabled)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if day.selected {
            Style::default()
                .fg(self.calendar_selected_fg)
                .bg(self.calendar_selected_bg)
                .add_modifier(Modifier::BOLD)
        } else if day.today {
            base.fg(self.calendar_today).add_modifier(Modifier::BOLD)
        } else {
            base
        };

        if day.cursor {
            base.bg(self.calendar_cursor_bg)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            base
        }
    }
}

/// Flags that decide how one calendar cell is drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DayStyle {
    pub in_month: bool,
    pub enabled: bool,
    pub today: bool,
    pub selected: bool,
    pub cursor: bool,
}

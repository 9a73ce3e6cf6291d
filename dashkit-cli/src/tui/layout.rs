//! TUI layout and rendering - Sidebar + record form + status line

use super::app::App;
use super::state::{Focus, FormField, Selection};
use super::views::sidebar::draw_sidebar;
use super::widgets::date_picker::{
    draw_calendar, draw_date_field, DatePickerLayout, FIELD_HEIGHT,
};
use dashkit_config::{Action, BindingContext};
use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const FIELD_WIDTH: u16 = 44;

/// Screen regions, shared by drawing and mouse routing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub sidebar: Option<Rect>,
    pub main: Rect,
    pub header: Rect,
    pub title: Rect,
    pub published_at: DatePickerLayout,
    pub created_after: DatePickerLayout,
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(screen: Rect, app: &App) -> Self {
        let sidebar_width = app.sidebar.effective_width().min(screen.width);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(sidebar_width), Constraint::Min(0)])
            .split(screen);
        let sidebar = (sidebar_width > 0).then_some(columns[0]);
        let main = columns[1];

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Form
                Constraint::Length(1), // Status line
            ])
            .split(main);
        let header = rows[0];
        let status = rows[2];

        let form = rows[1].inner(Margin::new(2, 1));
        let fields = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(FIELD_HEIGHT),
                Constraint::Min(0),
            ])
            .split(form);
        let width = FIELD_WIDTH.min(form.width);
        let field = |area: Rect| Rect { width, ..area };

        let show_time = app
            .form
            .picker(FormField::PublishedAt)
            .is_some_and(|p| p.options().show_time);

        Self {
            sidebar,
            main,
            header,
            title: field(fields[0]),
            published_at: DatePickerLayout::compute(field(fields[2]), screen, show_time),
            created_after: DatePickerLayout::compute(field(fields[4]), screen, show_time),
            status,
        }
    }

    pub fn date_field(&self, field: FormField) -> Option<&DatePickerLayout> {
        match field {
            FormField::Title => None,
            FormField::PublishedAt => Some(&self.published_at),
            FormField::CreatedAfter => Some(&self.created_after),
        }
    }
}

/// Draw the TUI
pub fn draw(f: &mut Frame, app: &App) {
    let layout = AppLayout::compute(f.area(), app);

    if let Some(area) = layout.sidebar {
        draw_sidebar(f, area, app);
    }
    draw_header(f, layout.header, app);
    draw_title_field(f, layout.title, app);
    for field in FormField::DATES {
        if let (Some(picker), Some(area)) = (app.form.picker(field), layout.date_field(field)) {
            let focused = app.focus == Focus::Field(field);
            draw_date_field(f, area, picker, field.label(), focused, &app.theme, &app.icons);
        }
    }
    draw_status_line(f, layout.status, app);

    // Calendars last so they sit above everything else
    for field in FormField::DATES {
        if let (Some(picker), Some(area)) = (app.form.picker(field), layout.date_field(field)) {
            draw_calendar(f, area, picker, &app.theme, &app.icons);
        }
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let (kind, icon) = match app.current {
        Some(Selection::Resource(_)) => ("Resource", app.icons.resource()),
        Some(Selection::Page(_)) => ("Page", app.icons.page()),
        None => ("", ""),
    };
    let line = match app.current_name() {
        Some(name) => Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(theme.accent)),
            Span::styled(format!("{}: ", kind), Style::default().fg(theme.text_tertiary)),
            Span::styled(name.to_string(), theme.selection_unfocused_style()),
            Span::styled("  › edit record", Style::default().fg(theme.text_tertiary)),
        ]),
        None => Line::from(Span::styled("Nothing selected", theme.placeholder_style())),
    };

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.unfocused_border_style());
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_title_field(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Field(FormField::Title);
    let block = Block::default()
        .title(format!(" {} ", FormField::Title.label()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            theme.focused_border_style()
        } else {
            theme.unfocused_border_style()
        });
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (visible, cursor_col) = app.form.title.visible_window(usize::from(inner.width));
    f.render_widget(
        Paragraph::new(visible).style(Style::default().fg(theme.text_primary)),
        inner,
    );
    if focused && inner.width > 0 && inner.height > 0 {
        let col = u16::try_from(cursor_col).unwrap_or(inner.width - 1);
        f.set_cursor_position((inner.x + col.min(inner.width - 1), inner.y));
    }
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = Vec::new();

    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!(" {} ", message),
            Style::default().fg(theme.success),
        ));
    }

    let hints = [
        (Action::ToggleCalendar, BindingContext::DateInput, "calendar"),
        (Action::FocusNext, BindingContext::Global, "next"),
        (Action::ToggleSidebar, BindingContext::Global, "sidebar"),
        (Action::Quit, BindingContext::Global, "quit"),
    ];
    for (action, context, label) in hints {
        if let Some(key) = app.keybinds.key_for(action, context) {
            spans.push(Span::styled(
                format!(" {} ", key),
                Style::default().fg(theme.accent_alt),
            ));
            spans.push(Span::styled(
                format!("{} ", label),
                Style::default().fg(theme.text_tertiary),
            ));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::date_picker::ExternalValue;
    use dashkit_config::defaults::default_config;

    #[test]
    fn test_layout_respects_sidebar_visibility() {
        let mut app = App::new(&default_config(), ExternalValue::Absent, None).unwrap();
        let screen = Rect::new(0, 0, 120, 40);

        let layout = AppLayout::compute(screen, &app);
        assert_eq!(layout.sidebar.map(|r| r.width), Some(28));
        assert_eq!(layout.main.x, 28);

        app.sidebar.toggle_visible();
        let layout = AppLayout::compute(screen, &app);
        assert_eq!(layout.sidebar, None);
        assert_eq!(layout.main.x, 0);
    }

    #[test]
    fn test_date_fields_do_not_overlap() {
        let app = App::new(&default_config(), ExternalValue::Absent, None).unwrap();
        let layout = AppLayout::compute(Rect::new(0, 0, 120, 40), &app);
        assert!(!layout.title.intersects(layout.published_at.field));
        assert!(!layout.published_at.field.intersects(layout.created_after.field));
        assert_eq!(layout.published_at.field.height, FIELD_HEIGHT);
        assert_eq!(layout.published_at.field.width, FIELD_WIDTH);
    }
}

//! Date field geometry and drawing
//!
//! [`DatePickerLayout`] is pure geometry so that drawing and mouse routing
//! agree on where the input, toggle and calendar sit.

use super::calendar::CalendarSurface;
use super::{DatePicker, InputVariant};
use crate::tui::icons::Icons;
use crate::tui::theme::{DayStyle, MochaTheme};
use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Alignment, Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Columns per day cell
pub const CELL_WIDTH: u16 = 3;
pub const CALENDAR_WIDTH: u16 = 7 * CELL_WIDTH + 2;
pub const TOGGLE_WIDTH: u16 = 5;
pub const FIELD_HEIGHT: u16 = 3;

const PLACEHOLDER: &str = "YYYY-MM-DD HH:MM";
/// Title row, weekday row, six weeks
const GRID_ROWS: u16 = 8;
const ARROW_WIDTH: u16 = 2;

/// Outer height of the calendar popup, borders included
pub fn calendar_height(show_time: bool) -> u16 {
    GRID_ROWS + 2 + u16::from(show_time)
}

/// What a pointer press inside the calendar popup landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarHit {
    PrevMonth,
    NextMonth,
    TimeBack,
    TimeForward,
    Day(NaiveDate),
    /// Inside the popup but on nothing interactive
    Chrome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DatePickerLayout {
    /// Whole field, input plus toggle
    pub field: Rect,
    pub input: Rect,
    pub toggle: Rect,
    /// Where the calendar popup goes when open
    pub calendar: Rect,
}

impl DatePickerLayout {
    pub fn compute(field: Rect, screen: Rect, show_time: bool) -> Self {
        let toggle_width = TOGGLE_WIDTH.min(field.width);
        let input = Rect {
            width: field.width - toggle_width,
            ..field
        };
        let toggle = Rect {
            x: input.right(),
            width: toggle_width,
            ..field
        };
        let calendar = place_calendar(field, screen, calendar_height(show_time));
        Self {
            field,
            input,
            toggle,
            calendar,
        }
    }

    /// Elements drawn above the backdrop
    pub fn raised(&self) -> [Rect; 3] {
        [self.input, self.toggle, self.calendar]
    }

    fn calendar_inner(&self) -> Rect {
        self.calendar.inner(Margin::new(1, 1))
    }

    /// Resolve a press inside the calendar popup, or None when outside it
    pub fn calendar_hit(&self, pos: Position, calendar: &CalendarSurface) -> Option<CalendarHit> {
        if !self.calendar.contains(pos) {
            return None;
        }
        let inner = self.calendar_inner();
        if !inner.contains(pos) {
            return Some(CalendarHit::Chrome);
        }

        let row = pos.y - inner.y;
        let col = pos.x - inner.x;
        let at_left = col < ARROW_WIDTH;
        let at_right = col >= inner.width.saturating_sub(ARROW_WIDTH);

        let show_time = calendar.options().show_time;
        let hit = match row {
            0 if at_left => CalendarHit::PrevMonth,
            0 if at_right => CalendarHit::NextMonth,
            r if (2..GRID_ROWS).contains(&r) => {
                let week = usize::from(row - 2);
                let weekday = usize::from(col / CELL_WIDTH);
                match calendar.grid()[week].get(weekday) {
                    Some(day) => CalendarHit::Day(*day),
                    None => CalendarHit::Chrome,
                }
            }
            GRID_ROWS if show_time && at_left => CalendarHit::TimeBack,
            GRID_ROWS if show_time && at_right => CalendarHit::TimeForward,
            _ => CalendarHit::Chrome,
        };
        Some(hit)
    }
}

/// Right-aligned under the field, flipped above when there is no room below
fn place_calendar(field: Rect, screen: Rect, height: u16) -> Rect {
    let width = CALENDAR_WIDTH.min(screen.width);
    let height = height.min(screen.height);

    let mut x = field.right().saturating_sub(width).max(screen.x);
    if x + width > screen.right() {
        x = screen.right().saturating_sub(width);
    }

    let y = if field.bottom() + height <= screen.bottom() {
        field.bottom()
    } else if field.y >= screen.y + height {
        field.y - height
    } else {
        screen.bottom().saturating_sub(height).max(screen.y)
    };

    Rect::new(x, y, width, height)
}

/// Draw the input and toggle of one date field
pub fn draw_date_field(
    f: &mut Frame,
    layout: &DatePickerLayout,
    picker: &DatePicker,
    label: &str,
    focused: bool,
    theme: &MochaTheme,
    icons: &Icons,
) {
    let filter = picker.variant() == InputVariant::Filter;
    let border_style = theme.field_border_style(filter, focused, picker.is_open());

    let title = if filter {
        format!(" {} {} ", icons.filter(), label)
    } else {
        format!(" {} ", label)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(if filter {
            BorderType::Plain
        } else {
            BorderType::Rounded
        })
        .border_style(border_style);
    let inner = block.inner(layout.input);
    f.render_widget(block, layout.input);

    let input = picker.input();
    if input.is_empty() && !focused {
        f.render_widget(
            Paragraph::new(PLACEHOLDER).style(theme.placeholder_style()),
            inner,
        );
    } else {
        let (visible, cursor_col) = input.visible_window(usize::from(inner.width));
        f.render_widget(
            Paragraph::new(visible).style(Style::default().fg(theme.text_primary)),
            inner,
        );
        if focused && inner.width > 0 && inner.height > 0 {
            let col = u16::try_from(cursor_col).unwrap_or(inner.width - 1);
            f.set_cursor_position((inner.x + col.min(inner.width - 1), inner.y));
        }
    }

    let toggle = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let toggle_inner = toggle.inner(layout.toggle);
    f.render_widget(toggle, layout.toggle);
    f.render_widget(
        Paragraph::new(icons.calendar())
            .alignment(Alignment::Center)
            .style(if picker.is_open() {
                Style::default().fg(theme.accent)
            } else {
                Style::default().fg(theme.text_secondary)
            }),
        toggle_inner,
    );
}

/// Draw the calendar popup when the picker is open; call after everything
/// underneath has been drawn
pub fn draw_calendar(
    f: &mut Frame,
    layout: &DatePickerLayout,
    picker: &DatePicker,
    theme: &MochaTheme,
    icons: &Icons,
) {
    let Some(calendar) = picker.calendar() else {
        return;
    };
    let area = layout.calendar;
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.bg_level1));
    let inner = block.inner(area);
    f.render_widget(block, area);
    if inner.height == 0 || inner.width < ARROW_WIDTH * 2 {
        return;
    }

    let arrow_style = Style::default().fg(theme.accent_alt);
    draw_row_with_arrows(
        f,
        Rect::new(inner.x, inner.y, inner.width, 1),
        icons.prev_month(),
        Span::styled(calendar.title(), theme.heading_style().fg(theme.text_primary)),
        icons.next_month(),
        arrow_style,
    );

    let mut lines = Vec::with_capacity(7);
    lines.push(Line::from(
        calendar
            .weekday_labels()
            .iter()
            .map(|label| Span::styled(format!("{:>2} ", label), theme.heading_style()))
            .collect::<Vec<_>>(),
    ));
    for week in calendar.grid() {
        let spans = week
            .iter()
            .map(|day| {
                Span::styled(
                    format!("{:>2} ", day.day()),
                    theme.calendar_day_style(day_style(calendar, *day)),
                )
            })
            .collect::<Vec<_>>();
        lines.push(Line::from(spans));
    }
    let grid_area = Rect::new(
        inner.x,
        inner.y + 1,
        inner.width,
        (GRID_ROWS - 1).min(inner.height.saturating_sub(1)),
    );
    f.render_widget(Paragraph::new(lines), grid_area);

    if calendar.options().show_time && inner.height > GRID_ROWS {
        let (hour, minute) = calendar.time();
        draw_row_with_arrows(
            f,
            Rect::new(inner.x, inner.y + GRID_ROWS, inner.width, 1),
            icons.prev_month(),
            Span::styled(
                format!("{} {:02}:{:02}", icons.clock(), hour, minute),
                Style::default().fg(theme.text_secondary),
            ),
            icons.next_month(),
            arrow_style,
        );
    }
}

fn draw_row_with_arrows(
    f: &mut Frame,
    row: Rect,
    prev: &str,
    center: Span<'_>,
    next: &str,
    arrow_style: Style,
) {
    let middle = Rect::new(
        row.x + ARROW_WIDTH,
        row.y,
        row.width - ARROW_WIDTH * 2,
        1,
    );
    f.render_widget(
        Paragraph::new(prev).style(arrow_style),
        Rect::new(row.x, row.y, ARROW_WIDTH, 1),
    );
    f.render_widget(
        Paragraph::new(Line::from(center)).alignment(Alignment::Center),
        middle,
    );
    f.render_widget(
        Paragraph::new(next)
            .alignment(Alignment::Right)
            .style(arrow_style),
        Rect::new(row.right() - ARROW_WIDTH, row.y, ARROW_WIDTH, 1),
    );
}

fn day_style(calendar: &CalendarSurface, day: NaiveDate) -> DayStyle {
    DayStyle {
        in_month: calendar.in_view_month(day),
        enabled: calendar.is_pickable(day),
        today: day == calendar.today(),
        selected: calendar.selected_date() == Some(day),
        cursor: day == calendar.cursor(),
    }
}

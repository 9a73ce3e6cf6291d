//! Mouse event handling

use crate::tui::app::App;
use crate::tui::layout::AppLayout;
use crate::tui::state::{Focus, FormField};
use crate::tui::views::sidebar::handle_sidebar_click;
use crate::tui::widgets::VirtualList;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

/// Handle mouse events (sync version)
///
/// Open calendars get the event first, topmost first: their backdrop
/// swallows any press that misses the picker.
pub fn handle_mouse_sync(app: &mut App, mouse: MouseEvent) {
    if !app.mouse_enabled {
        return;
    }
    let layout = AppLayout::compute(app.screen, app);
    let pos = Position::new(mouse.column, mouse.row);

    for field in FormField::DATES.into_iter().rev() {
        let Some(area) = layout.date_field(field) else {
            continue;
        };
        let Some(picker) = app.form.picker_mut(field) else {
            continue;
        };
        if !picker.is_open() {
            continue;
        }
        let result = picker.handle_mouse(&mouse, area);
        if result.is_handled() {
            if area.input.contains(pos) {
                app.set_focus(Focus::Field(field));
            }
            app.apply_picker_result(field, result);
            return;
        }
    }

    let over_sidebar = layout.sidebar.filter(|area| area.contains(pos));

    match mouse.kind {
        MouseEventKind::ScrollUp if over_sidebar.is_some() => {
            app.sidebar.move_up();
        }
        MouseEventKind::ScrollDown if over_sidebar.is_some() => {
            app.sidebar.move_down();
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(area) = over_sidebar {
                app.set_focus(Focus::Sidebar);
                handle_sidebar_click(app, area, pos);
            } else if layout.title.contains(pos) {
                app.set_focus(Focus::Field(FormField::Title));
            } else {
                click_date_field(app, &layout, &mouse, pos);
            }
        }
        _ => {}
    }
}

fn click_date_field(app: &mut App, layout: &AppLayout, mouse: &MouseEvent, pos: Position) {
    for field in FormField::DATES {
        let Some(area) = layout.date_field(field) else {
            continue;
        };
        if !area.field.contains(pos) {
            continue;
        }
        if area.input.contains(pos) {
            app.set_focus(Focus::Field(field));
        }
        if let Some(picker) = app.form.picker_mut(field) {
            let result = picker.handle_mouse(mouse, area);
            app.apply_picker_result(field, result);
        }
        return;
    }
}

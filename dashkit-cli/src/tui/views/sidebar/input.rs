//! Sidebar action and click handling

use crate::tui::app::App;
use crate::tui::widgets::VirtualList;
use dashkit_config::Action;
use ratatui::layout::{Position, Rect};

/// Run a sidebar movement or selection action; false for anything else
pub fn handle_sidebar_action(app: &mut App, action: Action) -> bool {
    match action {
        Action::MoveUp => {
            app.sidebar.move_up();
        }
        Action::MoveDown => {
            app.sidebar.move_down();
        }
        Action::GotoTop => app.sidebar.goto_top(),
        Action::GotoBottom => app.sidebar.goto_bottom(),
        Action::Select => {
            if let Some(selection) = app.sidebar.activate() {
                app.select(selection);
            }
        }
        _ => return false,
    }
    true
}

/// Move the cursor to the clicked row and activate it
pub fn handle_sidebar_click(app: &mut App, area: Rect, pos: Position) {
    let inner = Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    };
    if !inner.contains(pos) {
        return;
    }
    let line = usize::from(pos.y - inner.y);
    if let Some(row) = app.sidebar.row_at(line, usize::from(inner.height)) {
        app.sidebar.set_cursor(row);
        handle_sidebar_action(app, Action::Select);
    }
}

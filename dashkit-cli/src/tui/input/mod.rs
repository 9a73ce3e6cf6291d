//! Input handling: key bindings first, then the focused field

mod mouse;
pub mod resolver;

pub use mouse::handle_mouse_sync;

use crate::tui::app::App;
use crossterm::event::KeyEvent;

/// Handle a key press
///
/// Bindings are resolved through the active contexts; a key whose action
/// does not apply falls through to the focused field as text input.
pub fn handle_input_sync(app: &mut App, key: KeyEvent) {
    if let Some(action) = resolver::resolve_action(app, key) {
        tracing::trace!(action = action.name(), "key bound");
        if app.execute_action(action) {
            return;
        }
    }
    app.handle_focused_key(key);
}

//! Navigation sidebar: resources grouped by navigation label, then pages

mod input;
mod model;
mod render;

pub use input::{handle_sidebar_action, handle_sidebar_click};
pub use model::{PageEntry, ResourceEntry, ResourceNode, SidebarModel, SidebarRow};
pub use render::draw_sidebar;

use crate::tui::state::Selection;
use crate::tui::widgets::VirtualList;
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct SidebarState {
    pub model: SidebarModel,
    pub visible: bool,
    pub width: u16,
    cursor: usize,
    collapsed: HashSet<String>,
}

impl SidebarState {
    pub fn new(model: SidebarModel, visible: bool, width: u16) -> Self {
        Self {
            model,
            visible,
            width,
            cursor: 0,
            collapsed: HashSet::new(),
        }
    }

    pub fn rows(&self) -> Vec<SidebarRow> {
        self.model.rows(&self.collapsed)
    }

    pub fn current_row(&self) -> Option<SidebarRow> {
        self.rows().into_iter().nth(self.cursor)
    }

    pub fn is_collapsed(&self, group: &str) -> bool {
        self.collapsed.contains(group)
    }

    /// Width the sidebar takes in the layout; zero while hidden
    pub fn effective_width(&self) -> u16 {
        if self.visible {
            self.width
        } else {
            0
        }
    }

    pub fn toggle_visible(&mut self) {
        self.visible = !self.visible;
        tracing::debug!(visible = self.visible, "sidebar toggled");
    }

    pub fn toggle_group(&mut self, group: &str) {
        if !self.collapsed.remove(group) {
            self.collapsed.insert(group.to_string());
        }
        self.clamp_cursor();
    }

    /// Act on the row under the cursor: fold a group, or return what to show
    pub fn activate(&mut self) -> Option<Selection> {
        match self.current_row()? {
            SidebarRow::Group(name) => {
                self.toggle_group(&name);
                None
            }
            SidebarRow::Resource(idx) => Some(Selection::Resource(idx)),
            SidebarRow::Page(idx) => Some(Selection::Page(idx)),
        }
    }

    /// Display name of a selection
    pub fn selection_name(&self, selection: Selection) -> Option<&str> {
        match selection {
            Selection::Resource(idx) => self.model.resources.get(idx).map(|r| r.name.as_str()),
            Selection::Page(idx) => self.model.pages.get(idx).map(|p| p.name.as_str()),
        }
    }
}

impl VirtualList for SidebarState {
    fn virtual_len(&self) -> usize {
        self.rows().len()
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashkit_config::ShellConfig;

    fn state() -> SidebarState {
        SidebarState::new(SidebarModel::from_config(&ShellConfig::default()), true, 28)
    }

    #[test]
    fn test_activate_group_folds() {
        let mut sidebar = state();
        let before = sidebar.virtual_len();
        assert_eq!(sidebar.current_row(), Some(SidebarRow::Group("Content".to_string())));
        assert_eq!(sidebar.activate(), None);
        assert!(sidebar.is_collapsed("Content"));
        assert_eq!(sidebar.virtual_len(), before - 2);
        sidebar.activate();
        assert_eq!(sidebar.virtual_len(), before);
    }

    #[test]
    fn test_activate_resource_and_page() {
        let mut sidebar = state();
        sidebar.move_down();
        let selection = sidebar.activate();
        assert_eq!(selection, Some(Selection::Resource(0)));
        assert_eq!(sidebar.selection_name(Selection::Resource(0)), Some("Posts"));

        sidebar.goto_bottom();
        assert_eq!(sidebar.activate(), Some(Selection::Page(1)));
    }

    #[test]
    fn test_fold_clamps_cursor() {
        let mut sidebar = state();
        sidebar.goto_bottom();
        sidebar.toggle_group("Content");
        sidebar.toggle_group("Access");
        assert!(sidebar.cursor() < sidebar.virtual_len());
    }

    #[test]
    fn test_hidden_sidebar_has_no_width() {
        let mut sidebar = state();
        assert_eq!(sidebar.effective_width(), 28);
        sidebar.toggle_visible();
        assert_eq!(sidebar.effective_width(), 0);
    }
}

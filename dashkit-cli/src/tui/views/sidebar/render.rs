//! Sidebar rendering (resource groups and pages)

use super::SidebarRow;
use crate::tui::app::App;
use crate::tui::state::{Focus, Selection};
use crate::tui::widgets::VirtualList;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

/// Draw the navigation sidebar
pub fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let icons = &app.icons;
    let sidebar = &app.sidebar;
    let is_focused = app.focus == Focus::Sidebar;

    let border_style = if is_focused {
        theme.focused_border_style()
    } else {
        theme.unfocused_border_style()
    };
    let block = Block::default()
        .title(" Navigation ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    let inner_height = usize::from(block.inner(area).height);

    let rows = sidebar.rows();
    let offset = sidebar.scroll_offset(inner_height);

    let items: Vec<ListItem> = rows
        .iter()
        .enumerate()
        .skip(offset)
        .take(inner_height)
        .map(|(idx, row)| {
            let is_cursor = idx == sidebar.cursor();
            let style = if is_cursor && is_focused {
                theme.selection_style()
            } else if is_cursor {
                theme.selection_unfocused_style()
            } else {
                theme.normal_style()
            };

            let line = match row {
                SidebarRow::Group(name) => {
                    let marker = if sidebar.is_collapsed(name) {
                        icons.expand()
                    } else {
                        icons.collapse()
                    };
                    Line::from(vec![
                        Span::styled(format!(" {} ", marker), theme.heading_style()),
                        Span::styled(name.clone(), style.patch(theme.heading_style())),
                    ])
                }
                SidebarRow::Resource(i) => {
                    let resource = &sidebar.model.resources[*i];
                    let indent = if resource.navigation.is_some() { "   " } else { " " };
                    let active = app.current == Some(Selection::Resource(*i));
                    Line::from(vec![
                        Span::raw(indent),
                        Span::styled(
                            format!("{} ", icons.resource()),
                            Style::default().fg(if active { theme.accent } else { theme.text_tertiary }),
                        ),
                        Span::styled(resource.name.clone(), style),
                    ])
                }
                SidebarRow::Page(i) => {
                    let page = &sidebar.model.pages[*i];
                    let icon = page.icon.as_deref().unwrap_or(icons.page());
                    let active = app.current == Some(Selection::Page(*i));
                    Line::from(vec![
                        Span::raw(" "),
                        Span::styled(
                            format!("{} ", icon),
                            Style::default().fg(if active { theme.accent } else { theme.text_tertiary }),
                        ),
                        Span::styled(page.name.clone(), style),
                    ])
                }
            };
            ListItem::new(line)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}

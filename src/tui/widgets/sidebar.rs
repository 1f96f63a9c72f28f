// Sidebar widget: the collapsible content tree for the active section.
//
// Branch rows carry an expand/collapse glyph; leaf rows are plain names.
// The cursor row is highlighted while the sidebar has focus.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::app::PortalState;
use crate::content::SidebarRow;

/// Render the sidebar into the given area.
///
/// Callers skip this widget entirely while the sidebar is suppressed; the
/// zero-area guard is for cramped terminals.
pub fn render(frame: &mut Frame, area: Rect, state: &PortalState, focused: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let rows = state.visible_rows();
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let selected = row.name == state.nav.active_subsection;
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            ListItem::new(Line::from(Span::styled(row_text(row), style)))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(state.nav.active_section.label()),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    if !rows.is_empty() {
        list_state.select(Some(state.sidebar_cursor.min(rows.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Format one sidebar row: depth indent, branch glyph, name.
pub fn row_text(row: &SidebarRow) -> String {
    let indent = "  ".repeat(row.depth);
    let glyph = if row.is_branch {
        if row.expanded {
            "▼ "
        } else {
            "▶ "
        }
    } else {
        "  "
    };
    format!("{}{}{}", indent, glyph, row.name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones for the portal:
//
// +--------------------------------------------------+
// | Title Bar (1 row)                                 |
// +--------------------------------------------------+
// | Menu Bar (1 row)                                  |
// +------------+-------------------------------------+
// | Sidebar    | Content (heading, selectors, rating) |
// | (28%)      +-------------------------------------+
// |            | Comments (form + list)               |
// +------------+-------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+
//
// The sidebar column collapses to zero width while suppressed; the content
// column takes the full middle section.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each portal zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: product name, breadcrumb, decorative search box.
    pub title_bar: Rect,
    /// Second row: the five top-section tabs.
    pub menu_bar: Rect,
    /// Left column: the collapsible content tree. Zero-width while
    /// suppressed.
    pub sidebar: Rect,
    /// Upper right: heading, placeholder body, selectors, rating.
    pub content: Rect,
    /// Lower right: comment form and sorted comment list.
    pub comments: Rect,
    /// Bottom row: context-sensitive key hints.
    pub help_bar: Rect,
}

/// Build the portal layout from the available terminal area.
pub fn build_layout(area: Rect, sidebar_visible: bool) -> AppLayout {
    // Vertical: title(1) | menu(1) | middle(fill) | help(1)
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title bar
            Constraint::Length(1), // menu bar
            Constraint::Min(8),    // middle section (sidebar + content)
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let title_bar = vertical[0];
    let menu_bar = vertical[1];
    let middle = vertical[2];
    let help_bar = vertical[3];

    // Horizontal: sidebar (28%) | main column
    let sidebar_width = if sidebar_visible {
        Constraint::Percentage(28)
    } else {
        Constraint::Length(0)
    };
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([sidebar_width, Constraint::Min(20)])
        .split(middle);

    let sidebar = horizontal[0];
    let main_column = horizontal[1];

    // Main column vertical: content (fixed) | comments (fill)
    let main_sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(4)])
        .split(main_column);

    let content = main_sections[0];
    let comments = main_sections[1];

    AppLayout {
        title_bar,
        menu_bar,
        sidebar,
        content,
        comments,
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    /// A reasonable terminal size for testing.
    fn test_area() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    #[test]
    fn layout_all_rects_nonzero_with_sidebar() {
        let layout = build_layout(test_area(), true);
        let rects = [
            ("title_bar", layout.title_bar),
            ("menu_bar", layout.menu_bar),
            ("sidebar", layout.sidebar),
            ("content", layout.content),
            ("comments", layout.comments),
            ("help_bar", layout.help_bar),
        ];
        for (name, rect) in &rects {
            assert!(
                rect.width > 0 && rect.height > 0,
                "{} has zero area: {:?}",
                name,
                rect
            );
        }
    }

    #[test]
    fn hidden_sidebar_collapses_to_zero_width() {
        let layout = build_layout(test_area(), false);
        assert_eq!(layout.sidebar.width, 0);
        // Content takes the whole middle width.
        assert_eq!(layout.content.width, test_area().width);
    }

    #[test]
    fn single_row_bars() {
        let layout = build_layout(test_area(), true);
        assert_eq!(layout.title_bar.height, 1);
        assert_eq!(layout.menu_bar.height, 1);
        assert_eq!(layout.help_bar.height, 1);
    }

    #[test]
    fn content_sits_above_comments() {
        let layout = build_layout(test_area(), true);
        assert!(layout.content.y < layout.comments.y);
        assert_eq!(layout.content.x, layout.comments.x);
    }

    #[test]
    fn sidebar_spans_the_middle_height() {
        let layout = build_layout(test_area(), true);
        assert_eq!(
            layout.sidebar.height,
            layout.content.height + layout.comments.height
        );
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let layout = build_layout(Rect::new(0, 0, 10, 4), true);
        // Constraints degrade gracefully; no zone escapes the area.
        assert!(layout.help_bar.bottom() <= 4);
    }
}

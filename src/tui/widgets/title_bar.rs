// Title bar widget: product name, breadcrumb, decorative search box.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::PortalState;

/// Render the title bar into the given area.
///
/// Layout: [product name] [breadcrumb] ... [search box] [user glyph]
pub fn render(frame: &mut Frame, area: Rect, state: &PortalState) {
    let mut spans = vec![
        Span::styled(
            " Opn Docs ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(breadcrumb(state), Style::default().fg(Color::Gray)),
    ];

    // Right side is decorative: the search box performs no search and the
    // user glyph opens nothing.
    let left_width: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let right = " [ Search...        ] 👤 ";
    let right_width = right.chars().count();
    let total = area.width as usize;
    if total > left_width + right_width {
        spans.push(Span::raw(" ".repeat(total - left_width - right_width)));
    }
    spans.push(Span::styled(right, Style::default().fg(Color::DarkGray)));

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Blue));
    frame.render_widget(paragraph, area);
}

/// Breadcrumb text: "{section}" or "{section} - {subsection}".
pub fn breadcrumb(state: &PortalState) -> String {
    let section = state.nav.active_section.label();
    if state.nav.active_subsection.is_empty() {
        section.to_string()
    } else {
        format!("{} - {}", section, state.nav.active_subsection)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Action;
    use crate::portal::nav::TopSection;

    #[test]
    fn breadcrumb_joins_section_and_subsection() {
        let state = PortalState::new();
        assert_eq!(breadcrumb(&state), "Documents - Guides");
    }

    #[test]
    fn breadcrumb_without_subsection() {
        let mut state = PortalState::new();
        state.apply(Action::SelectSection(TopSection::ApiPlayground));
        assert_eq!(breadcrumb(&state), "API Playground");
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(100, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = PortalState::new();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_survives_narrow_area() {
        let backend = ratatui::backend::TestBackend::new(12, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = PortalState::new();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}

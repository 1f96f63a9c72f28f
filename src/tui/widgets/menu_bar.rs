// Menu bar widget: the five top-section tabs with the active one highlighted.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::portal::nav::TopSection;

/// Render the menu bar into the given area.
pub fn render(frame: &mut Frame, area: Rect, active: TopSection) {
    let paragraph = Paragraph::new(Line::from(section_spans(active)))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Build tab spans with digit shortcuts and the active section highlighted.
/// E.g. "[1:Documents] [2:Articles] [3:FAQs] [4:API Playground] [5:Changelog]"
pub fn section_spans(active: TopSection) -> Vec<Span<'static>> {
    let mut spans = vec![Span::raw(" ")];
    for (i, section) in TopSection::ALL.iter().enumerate() {
        let style = if *section == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(
            format!("[{}:{}]", i + 1, section.label()),
            style,
        ));
        spans.push(Span::raw(" "));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

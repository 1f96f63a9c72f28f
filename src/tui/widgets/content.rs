// Content pane widget: heading, placeholder body, selectors, star rating.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::PortalState;
use crate::portal::prefs::MAX_RATING;

/// Render the content pane into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &PortalState, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let mut lines = vec![
        Line::from(Span::styled(
            state.heading().to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state.body_text(),
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
    ];

    if let Some(selectors) = selector_line(state) {
        lines.push(selectors);
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::raw("Rate this content:")));
    lines.push(Line::from(star_spans(state.prefs.rating)));
    lines.push(Line::from(Span::styled(
        format!("Overall rating: {}/{}", state.prefs.rating, MAX_RATING),
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("Content"),
    );
    frame.render_widget(paragraph, area);
}

/// The selector row: language always (outside API Playground), API version
/// on Documents only. `None` when no selector is visible.
pub fn selector_line(state: &PortalState) -> Option<Line<'static>> {
    if !state.selectors_visible() {
        return None;
    }
    let mut spans = vec![
        Span::raw("Language: "),
        Span::styled(
            format!("[{}]", state.prefs.language.label()),
            Style::default().fg(Color::Green),
        ),
        Span::styled(" (g)", Style::default().fg(Color::DarkGray)),
    ];
    if state.version_selector_visible() {
        spans.push(Span::raw("   API Version: "));
        spans.push(Span::styled(
            format!("[{}]", state.prefs.api_version.label()),
            Style::default().fg(Color::Green),
        ));
        spans.push(Span::styled(" (v)", Style::default().fg(Color::DarkGray)));
    }
    Some(Line::from(spans))
}

/// Five stars, filled up to the current rating.
pub fn star_spans(rating: u8) -> Vec<Span<'static>> {
    (1..=MAX_RATING)
        .map(|star| {
            if star <= rating {
                Span::styled("★ ", Style::default().fg(Color::Yellow))
            } else {
                Span::styled("☆ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

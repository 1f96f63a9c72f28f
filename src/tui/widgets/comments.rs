// Comments widget: form buffers on top, sorted comment list below.
//
// Collapsed comments show only their timestamp row; expanded ones also show
// the text. The list is the sorted projection, so the highlight follows
// `comment_cursor` directly.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::app::{ComposeField, PortalState};
use crate::portal::comments::{Comment, SortOrder};

/// Render the comments panel into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &PortalState, focused: bool) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!("Comments ({})", state.board.len()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    // Form (3 rows) above the list.
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    render_form(frame, sections[0], state);
    render_list(frame, sections[1], state);
}

fn render_form(frame: &mut Frame, area: Rect, state: &PortalState) {
    let draft_active = state.compose == Some(ComposeField::Draft);
    let captcha_active = state.compose == Some(ComposeField::Captcha);

    let lines = vec![
        form_line("Comment: ", &state.board.draft, draft_active),
        form_line("CAPTCHA: ", &state.board.captcha, captcha_active),
        Line::from(Span::styled(
            format!(" [s] {}", sort_label(state.board.sort)),
            Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn form_line(label: &'static str, value: &str, active: bool) -> Line<'static> {
    let style = if active {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default().fg(Color::White)
    };
    let cursor = if active { "_" } else { "" };
    Line::from(vec![
        Span::styled(format!(" {}", label), Style::default().fg(Color::Gray)),
        Span::styled(format!("{}{}", value, cursor), style),
    ])
}

fn render_list(frame: &mut Frame, area: Rect, state: &PortalState) {
    let sorted = state.board.sorted();
    if sorted.is_empty() {
        let paragraph = Paragraph::new("  No comments yet.")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = sorted
        .iter()
        .map(|comment| {
            let mut lines = vec![Line::from(Span::styled(
                comment_header(comment),
                Style::default().fg(Color::White),
            ))];
            if comment.is_expanded {
                lines.push(Line::from(Span::styled(
                    format!("   {}", comment.text),
                    Style::default().fg(Color::Gray),
                )));
            }
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).highlight_style(
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    );

    let mut list_state = ListState::default();
    list_state.select(Some(state.comment_cursor.min(sorted.len() - 1)));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Header row for one comment: expansion glyph and timestamp.
pub fn comment_header(comment: &Comment) -> String {
    let glyph = if comment.is_expanded { "▼" } else { "▶" };
    format!(
        " {} {}",
        glyph,
        comment.created_at.format("%Y-%m-%d %H:%M")
    )
}

/// Label for the sort control: names the direction a press switches to.
pub fn sort_label(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::Descending => "Sort Ascending",
        SortOrder::Ascending => "Sort Descending",
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

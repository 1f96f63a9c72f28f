// Help bar widget: context-sensitive key hints for the active mode.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{Focus, PortalState};

/// Render the help bar into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &PortalState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        hint_text(state),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Key hints for the current mode and focused pane.
pub fn hint_text(state: &PortalState) -> &'static str {
    if state.confirm_quit {
        return " y:Confirm quit | n:Cancel";
    }
    if state.compose.is_some() {
        return " Enter:Post | Tab:Field | Esc:Close | type to edit";
    }
    match state.focus {
        Focus::Sidebar => {
            " 1-5:Section | ↑↓:Move | Enter:Open/Select | Tab:Pane | b:Sidebar | q:Quit"
        }
        Focus::Content => {
            " 1-5:Rate | g:Language | v:Version | Tab:Pane | b:Sidebar | q:Quit"
        }
        Focus::Comments => {
            " 1-5:Section | ↑↓:Move | Enter:Fold | s:Sort | c:Compose | Tab:Pane | q:Quit"
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

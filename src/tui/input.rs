// Keyboard input handling and action dispatch.
//
// Translates crossterm key events into `Action`s applied to `PortalState`,
// or into local view mutations (focus, cursors, modal flags). Modal states
// are checked in priority order: quit confirmation, then compose mode, then
// normal dispatch by focused pane.

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{Action, ComposeField, Focus, PortalState};
use crate::portal::nav::TopSection;

/// Handle a keyboard event. Returns `true` when the app should exit.
pub fn handle_key(key_event: KeyEvent, state: &mut PortalState) -> bool {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    // Ctrl+C always quits immediately regardless of mode (escape hatch)
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return true;
    }

    // Quit confirmation mode: only y/q confirm, n/Esc cancel, everything else blocked
    if state.confirm_quit {
        return handle_confirm_quit(key_event, state);
    }

    // Compose mode: capture printable characters into the form buffers
    if state.compose.is_some() {
        handle_compose(key_event, state);
        return false;
    }

    // Normal mode key dispatch
    match key_event.code {
        // Number keys: stars while the content pane has focus, top-section
        // switching everywhere else.
        KeyCode::Char(c @ '1'..='5') => {
            let digit = c as u8 - b'0';
            if state.focus == Focus::Content {
                state.apply(Action::RateStar(digit));
            } else if let Some(section) = TopSection::from_digit(digit) {
                state.apply(Action::SelectSection(section));
            }
            false
        }

        // Focus cycling
        KeyCode::Tab => {
            state.cycle_focus(true);
            false
        }
        KeyCode::BackTab => {
            state.cycle_focus(false);
            false
        }

        // Cursor movement in the focused pane
        KeyCode::Up | KeyCode::Char('k') => {
            cursor_up(state);
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            cursor_down(state);
            false
        }

        // Activation
        KeyCode::Enter | KeyCode::Char(' ') => {
            activate(state);
            false
        }

        // Sidebar visibility
        KeyCode::Char('b') => {
            state.apply(Action::ToggleSidebar);
            false
        }

        // Selectors
        KeyCode::Char('g') => {
            state.apply(Action::CycleLanguage);
            false
        }
        KeyCode::Char('v') => {
            state.apply(Action::CycleApiVersion);
            false
        }

        // Comment sort direction
        KeyCode::Char('s') => {
            state.apply(Action::ToggleSortOrder);
            false
        }

        // Compose a new comment
        KeyCode::Char('c') => {
            state.compose = Some(ComposeField::Draft);
            false
        }

        // Quit: enter confirmation mode instead of quitting immediately
        KeyCode::Char('q') => {
            state.confirm_quit = true;
            false
        }

        _ => false,
    }
}

/// Handle key events while in quit confirmation mode.
///
/// - `y` or `q` confirms quit
/// - `n` or `Esc` cancels (returns to normal mode)
/// - All other keys are blocked
fn handle_confirm_quit(key_event: KeyEvent, state: &mut PortalState) -> bool {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            true
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            state.confirm_quit = false;
            false
        }
        _ => false, // Block all other input
    }
}

/// Handle key events while in compose mode.
///
/// - Printable characters edit the active field (draft or CAPTCHA)
/// - Tab switches between the two fields
/// - Enter submits; an empty/whitespace draft is a silent no-op and the
///   form stays open
/// - Esc leaves compose mode with both buffers preserved
fn handle_compose(key_event: KeyEvent, state: &mut PortalState) {
    let field = match state.compose {
        Some(field) => field,
        None => return,
    };

    match key_event.code {
        KeyCode::Esc => {
            state.compose = None;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            state.compose = Some(match field {
                ComposeField::Draft => ComposeField::Captcha,
                ComposeField::Captcha => ComposeField::Draft,
            });
        }
        KeyCode::Enter => {
            let before = state.board.len();
            state.apply(Action::SubmitComment { at: Utc::now() });
            if state.board.len() > before {
                state.compose = None;
            }
        }
        KeyCode::Backspace => {
            match field {
                ComposeField::Draft => state.board.draft.pop(),
                ComposeField::Captcha => state.board.captcha.pop(),
            };
        }
        KeyCode::Char(c) => match field {
            ComposeField::Draft => state.board.draft.push(c),
            ComposeField::Captcha => state.board.captcha.push(c),
        },
        _ => {}
    }
}

// ---------------------------------------------------------------------------
// Cursor and activation helpers
// ---------------------------------------------------------------------------

fn cursor_up(state: &mut PortalState) {
    match state.focus {
        Focus::Sidebar => {
            state.sidebar_cursor = state.sidebar_cursor.saturating_sub(1);
        }
        Focus::Comments => {
            state.comment_cursor = state.comment_cursor.saturating_sub(1);
        }
        Focus::Content => {}
    }
}

fn cursor_down(state: &mut PortalState) {
    match state.focus {
        Focus::Sidebar => {
            let rows = state.visible_rows().len();
            if rows > 0 && state.sidebar_cursor + 1 < rows {
                state.sidebar_cursor += 1;
            }
        }
        Focus::Comments => {
            let len = state.board.len();
            if len > 0 && state.comment_cursor + 1 < len {
                state.comment_cursor += 1;
            }
        }
        Focus::Content => {}
    }
}

/// Enter/Space in the focused pane: activate the sidebar row under the
/// cursor, or toggle the selected comment.
fn activate(state: &mut PortalState) {
    match state.focus {
        Focus::Sidebar => {
            let rows = state.visible_rows();
            if let Some(row) = rows.get(state.sidebar_cursor) {
                let action = if row.is_branch {
                    Action::ToggleBranch {
                        path: row.path.clone(),
                        name: row.name.clone(),
                    }
                } else {
                    Action::SelectLeaf {
                        name: row.name.clone(),
                    }
                };
                state.apply(action);
            }
        }
        Focus::Comments => {
            if let Some(id) = state.selected_comment_id() {
                state.apply(Action::ToggleComment(id));
            }
        }
        Focus::Content => {}
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::prefs::DisplayLanguage;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = PortalState::new();
        let mut event = key(KeyCode::Char('q'));
        event.kind = KeyEventKind::Release;
        assert!(!handle_key(event, &mut state));
        assert!(!state.confirm_quit);
    }

    #[test]
    fn ctrl_c_quits_from_any_mode() {
        let mut state = PortalState::new();
        assert!(handle_key(ctrl(KeyCode::Char('c')), &mut state));

        let mut state = PortalState::new();
        state.compose = Some(ComposeField::Draft);
        assert!(handle_key(ctrl(KeyCode::Char('c')), &mut state));

        let mut state = PortalState::new();
        state.confirm_quit = true;
        assert!(handle_key(ctrl(KeyCode::Char('c')), &mut state));
    }

    #[test]
    fn q_enters_confirmation_then_y_quits() {
        let mut state = PortalState::new();
        assert!(!handle_key(key(KeyCode::Char('q')), &mut state));
        assert!(state.confirm_quit);
        assert!(handle_key(key(KeyCode::Char('y')), &mut state));
    }

    #[test]
    fn n_cancels_quit_confirmation() {
        let mut state = PortalState::new();
        state.confirm_quit = true;
        assert!(!handle_key(key(KeyCode::Char('n')), &mut state));
        assert!(!state.confirm_quit);
    }

    #[test]
    fn other_keys_blocked_during_confirmation() {
        let mut state = PortalState::new();
        state.confirm_quit = true;
        assert!(!handle_key(key(KeyCode::Char('1')), &mut state));
        assert_eq!(state.nav.active_section, TopSection::Documents);
        assert!(state.confirm_quit);
    }

    #[test]
    fn digits_switch_sections_outside_content_focus() {
        let mut state = PortalState::new();
        handle_key(key(KeyCode::Char('2')), &mut state);
        assert_eq!(state.nav.active_section, TopSection::Articles);
        handle_key(key(KeyCode::Char('5')), &mut state);
        assert_eq!(state.nav.active_section, TopSection::Changelog);
    }

    #[test]
    fn digits_rate_while_content_has_focus() {
        let mut state = PortalState::new();
        state.focus = Focus::Content;
        handle_key(key(KeyCode::Char('4')), &mut state);
        assert_eq!(state.prefs.rating, 4);
        assert_eq!(state.nav.active_section, TopSection::Documents);
    }

    #[test]
    fn tab_cycles_focus() {
        let mut state = PortalState::new();
        handle_key(key(KeyCode::Tab), &mut state);
        assert_eq!(state.focus, Focus::Content);
        handle_key(key(KeyCode::BackTab), &mut state);
        assert_eq!(state.focus, Focus::Sidebar);
    }

    #[test]
    fn sidebar_cursor_moves_and_clamps() {
        let mut state = PortalState::new();
        // Three collapsed categories under Documents.
        handle_key(key(KeyCode::Down), &mut state);
        handle_key(key(KeyCode::Down), &mut state);
        assert_eq!(state.sidebar_cursor, 2);
        handle_key(key(KeyCode::Down), &mut state);
        assert_eq!(state.sidebar_cursor, 2);
        handle_key(key(KeyCode::Up), &mut state);
        assert_eq!(state.sidebar_cursor, 1);
    }

    #[test]
    fn enter_on_branch_expands_and_selects() {
        let mut state = PortalState::new();
        handle_key(key(KeyCode::Enter), &mut state);
        assert!(state.nav.is_expanded("Guides"));
        assert_eq!(state.nav.active_subsection, "Guides");
        assert_eq!(state.visible_rows().len(), 5);
    }

    #[test]
    fn enter_on_leaf_selects_without_expanding() {
        let mut state = PortalState::new();
        handle_key(key(KeyCode::Enter), &mut state); // expand Guides
        handle_key(key(KeyCode::Down), &mut state); // onto "Getting Started"
        handle_key(key(KeyCode::Enter), &mut state);
        assert_eq!(state.nav.active_subsection, "Getting Started");
        assert_eq!(state.visible_rows().len(), 5);
    }

    #[test]
    fn space_toggles_selected_comment() {
        let mut state = PortalState::new();
        state.focus = Focus::Comments;
        // Descending order puts id 2 first.
        handle_key(key(KeyCode::Char(' ')), &mut state);
        assert!(!state.board.comments()[1].is_expanded);
    }

    #[test]
    fn b_toggles_sidebar() {
        let mut state = PortalState::new();
        handle_key(key(KeyCode::Char('b')), &mut state);
        assert!(!state.nav.sidebar_visible);
        handle_key(key(KeyCode::Char('b')), &mut state);
        assert!(state.nav.sidebar_visible);
    }

    #[test]
    fn g_cycles_language_and_s_toggles_sort() {
        let mut state = PortalState::new();
        handle_key(key(KeyCode::Char('g')), &mut state);
        assert_eq!(state.prefs.language, DisplayLanguage::Japanese);

        handle_key(key(KeyCode::Char('s')), &mut state);
        assert_eq!(
            state.board.sort,
            crate::portal::comments::SortOrder::Ascending
        );
    }

    #[test]
    fn c_enters_compose_and_typing_edits_the_draft() {
        let mut state = PortalState::new();
        handle_key(key(KeyCode::Char('c')), &mut state);
        assert_eq!(state.compose, Some(ComposeField::Draft));

        for ch in "Hi".chars() {
            handle_key(key(KeyCode::Char(ch)), &mut state);
        }
        assert_eq!(state.board.draft, "Hi");

        handle_key(key(KeyCode::Backspace), &mut state);
        assert_eq!(state.board.draft, "H");
    }

    #[test]
    fn compose_tab_switches_to_captcha() {
        let mut state = PortalState::new();
        state.compose = Some(ComposeField::Draft);
        handle_key(key(KeyCode::Tab), &mut state);
        assert_eq!(state.compose, Some(ComposeField::Captcha));

        handle_key(key(KeyCode::Char('z')), &mut state);
        assert_eq!(state.board.captcha, "z");
        assert!(state.board.draft.is_empty());
    }

    #[test]
    fn compose_esc_preserves_buffers() {
        let mut state = PortalState::new();
        state.compose = Some(ComposeField::Draft);
        handle_key(key(KeyCode::Char('x')), &mut state);
        handle_key(key(KeyCode::Esc), &mut state);
        assert!(state.compose.is_none());
        assert_eq!(state.board.draft, "x");
    }

    #[test]
    fn compose_enter_submits_and_leaves_compose() {
        let mut state = PortalState::new();
        state.compose = Some(ComposeField::Draft);
        for ch in "Nice".chars() {
            handle_key(key(KeyCode::Char(ch)), &mut state);
        }
        handle_key(key(KeyCode::Enter), &mut state);
        assert!(state.compose.is_none());
        assert_eq!(state.board.len(), 3);
        assert_eq!(state.board.comments()[2].text, "Nice");
        assert!(state.board.draft.is_empty());
    }

    #[test]
    fn compose_enter_with_blank_draft_stays_open() {
        let mut state = PortalState::new();
        state.compose = Some(ComposeField::Draft);
        handle_key(key(KeyCode::Char(' ')), &mut state);
        handle_key(key(KeyCode::Enter), &mut state);
        assert_eq!(state.compose, Some(ComposeField::Draft));
        assert_eq!(state.board.len(), 2);
        assert_eq!(state.board.draft, " ");
    }

    #[test]
    fn section_keys_still_work_from_comments_focus() {
        let mut state = PortalState::new();
        state.focus = Focus::Comments;
        handle_key(key(KeyCode::Char('3')), &mut state);
        assert_eq!(state.nav.active_section, TopSection::Faqs);
    }

    #[test]
    fn comment_cursor_clamps_at_list_end() {
        let mut state = PortalState::new();
        state.focus = Focus::Comments;
        handle_key(key(KeyCode::Down), &mut state);
        assert_eq!(state.comment_cursor, 1);
        handle_key(key(KeyCode::Down), &mut state);
        assert_eq!(state.comment_cursor, 1);
    }
}

// Integration tests for the documentation portal.
//
// These tests exercise the full system end-to-end through the library
// crate's public API: the static catalog, navigation and comment state
// transitions, keyboard dispatch, and full-frame rendering on a test
// backend.

use chrono::{TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use opndocs::app::{Action, ComposeField, Focus, PortalState};
use opndocs::portal::comments::SortOrder;
use opndocs::portal::nav::TopSection;
use opndocs::tui::{input, render_frame};

// ===========================================================================
// Test helpers
// ===========================================================================

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(state: &mut PortalState, codes: &[KeyCode]) {
    for code in codes {
        input::handle_key(key(*code), state);
    }
}

fn draw(state: &PortalState) {
    let backend = ratatui::backend::TestBackend::new(120, 40);
    let mut terminal = ratatui::Terminal::new(backend).unwrap();
    terminal.draw(|frame| render_frame(frame, state)).unwrap();
}

// ===========================================================================
// Navigation
// ===========================================================================

#[test]
fn selecting_each_section_resets_subsection_and_expansion() {
    let mut state = PortalState::new();
    state.apply(Action::ToggleBranch {
        path: "Guides".to_string(),
        name: "Guides".to_string(),
    });

    for (section, first) in [
        (TopSection::Articles, "Billing"),
        (TopSection::Faqs, "Billing"),
        (TopSection::ApiPlayground, ""),
        (TopSection::Changelog, "2024"),
        (TopSection::Documents, "Guides"),
    ] {
        state.apply(Action::SelectSection(section));
        assert_eq!(state.nav.active_subsection, first);
        assert!(state.nav.expanded.is_empty());
    }
}

#[test]
fn branch_toggle_parity_is_independent_of_siblings_and_ancestors() {
    let mut state = PortalState::new();
    let toggle = |state: &mut PortalState, path: &str| {
        state.apply(Action::ToggleBranch {
            path: path.to_string(),
            name: path.rsplit('.').next().unwrap_or(path).to_string(),
        });
    };

    toggle(&mut state, "Guides");
    toggle(&mut state, "Payment Methods");
    toggle(&mut state, "Guides");
    toggle(&mut state, "Guides");
    toggle(&mut state, "Guides");

    // Odd number of Guides toggles flips it exactly once from its start.
    assert!(state.nav.is_expanded("Guides"));
    assert!(state.nav.is_expanded("Payment Methods"));

    toggle(&mut state, "Payment Methods");
    assert!(state.nav.is_expanded("Guides"));
    assert!(!state.nav.is_expanded("Payment Methods"));
}

#[test]
fn keyboard_walkthrough_of_the_sidebar_tree() {
    let mut state = PortalState::new();

    // Open "Guides", descend to its first child, select it.
    press(
        &mut state,
        &[KeyCode::Enter, KeyCode::Down, KeyCode::Enter],
    );
    assert_eq!(state.nav.active_subsection, "Getting Started");

    // Section switch drops the expansion and reseeds the selection.
    press(&mut state, &[KeyCode::Char('3')]);
    assert_eq!(state.nav.active_section, TopSection::Faqs);
    assert_eq!(state.nav.active_subsection, "Billing");
    assert!(state.visible_rows().iter().all(|r| !r.expanded));
}

#[test]
fn api_playground_suppresses_sidebar_and_selectors() {
    let mut state = PortalState::new();
    press(&mut state, &[KeyCode::Char('4')]);

    assert!(state.nav.sidebar_suppressed());
    assert!(state.visible_rows().is_empty());
    assert!(!state.selectors_visible());
    assert!(!state.version_selector_visible());
    assert_eq!(state.heading(), "API Playground");

    // Hidden-state precedence holds regardless of the visibility flag.
    state.nav.sidebar_visible = false;
    press(&mut state, &[KeyCode::Char('b')]);
    assert!(state.nav.sidebar_visible);
    assert!(state.nav.sidebar_suppressed());
}

// ===========================================================================
// Preferences
// ===========================================================================

#[test]
fn star_clicks_set_exact_ratings() {
    let mut state = PortalState::new();
    state.focus = Focus::Content;
    for (code, expected) in [
        (KeyCode::Char('3'), 3u8),
        (KeyCode::Char('3'), 3),
        (KeyCode::Char('5'), 5),
        (KeyCode::Char('1'), 1),
    ] {
        press(&mut state, &[code]);
        assert_eq!(state.prefs.rating, expected);
    }
    // Rating keys never switched the section.
    assert_eq!(state.nav.active_section, TopSection::Documents);
}

#[test]
fn language_cycles_everywhere_but_api_playground() {
    let mut state = PortalState::new();
    press(&mut state, &[KeyCode::Char('g'), KeyCode::Char('g')]);
    assert_eq!(state.prefs.language.label(), "ไทย");

    press(&mut state, &[KeyCode::Char('4'), KeyCode::Char('g')]);
    assert_eq!(state.prefs.language.label(), "ไทย");
}

// ===========================================================================
// Comments
// ===========================================================================

#[test]
fn default_sort_is_newest_first_and_toggle_reverses() {
    let mut state = PortalState::new();
    let first = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let second = Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap();

    let view = state.board.sorted();
    assert_eq!(
        view.iter().map(|c| c.created_at).collect::<Vec<_>>(),
        vec![second, first]
    );

    press(&mut state, &[KeyCode::Char('s')]);
    assert_eq!(state.board.sort, SortOrder::Ascending);
    let view = state.board.sorted();
    assert_eq!(
        view.iter().map(|c| c.created_at).collect::<Vec<_>>(),
        vec![first, second]
    );
}

#[test]
fn composing_a_comment_end_to_end() {
    let mut state = PortalState::new();
    state.focus = Focus::Comments;

    press(&mut state, &[KeyCode::Char('c')]);
    assert_eq!(state.compose, Some(ComposeField::Draft));

    for ch in "Looks good".chars() {
        press(&mut state, &[KeyCode::Char(ch)]);
    }
    // Wander into the CAPTCHA field, type something, come back, submit.
    press(&mut state, &[KeyCode::Tab]);
    for ch in "4821".chars() {
        press(&mut state, &[KeyCode::Char(ch)]);
    }
    press(&mut state, &[KeyCode::Enter]);

    assert!(state.compose.is_none());
    assert_eq!(state.board.len(), 3);
    let added = &state.board.comments()[2];
    assert_eq!(added.text, "Looks good");
    assert_eq!(added.id, 3);
    assert!(added.is_expanded);
    assert!(state.board.draft.is_empty());
    assert!(state.board.captcha.is_empty());
}

#[test]
fn whitespace_only_submission_leaves_the_board_unchanged() {
    let mut state = PortalState::new();
    press(&mut state, &[KeyCode::Char('c')]);
    press(&mut state, &[KeyCode::Char(' '), KeyCode::Char(' ')]);
    press(&mut state, &[KeyCode::Enter]);

    assert_eq!(state.board.len(), 2);
    assert_eq!(state.compose, Some(ComposeField::Draft));
}

#[test]
fn toggling_a_comment_through_the_sorted_view() {
    let mut state = PortalState::new();
    state.focus = Focus::Comments;

    // Cursor 0 under descending sort is the 2024-03-02 comment (id 2).
    press(&mut state, &[KeyCode::Enter]);
    assert!(!state.board.comments()[1].is_expanded);
    assert!(state.board.comments()[0].is_expanded);

    // Flip the sort; cursor 0 is now id 1.
    press(&mut state, &[KeyCode::Char('s'), KeyCode::Enter]);
    assert!(!state.board.comments()[0].is_expanded);

    press(&mut state, &[KeyCode::Enter]);
    assert!(state.board.comments()[0].is_expanded);
}

#[test]
fn submitted_comments_join_the_sort_projection() {
    let mut state = PortalState::new();
    state.board.draft = "Third".to_string();
    state.apply(Action::SubmitComment {
        at: Utc.with_ymd_and_hms(2024, 3, 3, 0, 0, 0).unwrap(),
    });

    let view = state.board.sorted();
    assert_eq!(view[0].text, "Third");

    state.apply(Action::ToggleSortOrder);
    let view = state.board.sorted();
    assert_eq!(view[2].text, "Third");
}

// ===========================================================================
// Rendering
// ===========================================================================

#[test]
fn full_frames_render_across_a_session() {
    let mut state = PortalState::new();
    draw(&state);

    press(&mut state, &[KeyCode::Enter, KeyCode::Down]);
    draw(&state);

    press(&mut state, &[KeyCode::Char('4')]);
    draw(&state);

    // Focus landed on the content pane when the sidebar vanished; move to
    // the comments pane so the digit switches sections again.
    press(&mut state, &[KeyCode::Tab, KeyCode::Char('1'), KeyCode::Char('b')]);
    assert_eq!(state.nav.active_section, TopSection::Documents);
    draw(&state);

    press(&mut state, &[KeyCode::Char('c'), KeyCode::Char('x')]);
    draw(&state);

    press(&mut state, &[KeyCode::Esc, KeyCode::Char('q')]);
    assert!(state.confirm_quit);
    draw(&state);
}

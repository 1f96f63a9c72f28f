// Application state and update logic.
//
// `PortalState` is the single owned store behind the UI. Every user
// interaction becomes an `Action` applied synchronously by `apply`; the
// render path only reads. View-local concerns (focus, cursors, modal flags)
// live alongside the domain state so one struct describes a whole session.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::content::{self, ContentTree, SidebarRow};
use crate::portal::comments::CommentBoard;
use crate::portal::nav::{NavigationState, TopSection};
use crate::portal::prefs::SelectionPreferences;

// ---------------------------------------------------------------------------
// Focus and compose
// ---------------------------------------------------------------------------

/// Which pane receives pane-local keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Content,
    Comments,
}

/// Which form buffer compose mode is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeField {
    Draft,
    Captcha,
}

// ---------------------------------------------------------------------------
// Action
// ---------------------------------------------------------------------------

/// One user interaction, applied synchronously to `PortalState`.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Switch the active top section. Atomically clears the expansion map
    /// and the subsection, then re-seeds the subsection with the section's
    /// first category (empty when the section has no tree).
    SelectSection(TopSection),
    /// Activate a branch row: flip its expansion flag and select its name.
    ToggleBranch { path: String, name: String },
    /// Activate a leaf row: select its name.
    SelectLeaf { name: String },
    ToggleSidebar,
    CycleLanguage,
    CycleApiVersion,
    /// Set the rating to exactly the given star (1..=5).
    RateStar(u8),
    ToggleSortOrder,
    ToggleComment(u64),
    /// Submit the comment draft with the given timestamp. The clock is an
    /// input so the update stays pure.
    SubmitComment { at: DateTime<Utc> },
}

// ---------------------------------------------------------------------------
// PortalState
// ---------------------------------------------------------------------------

/// The complete session state.
pub struct PortalState {
    /// Immutable catalog built at startup.
    pub tree: ContentTree,
    pub nav: NavigationState,
    pub prefs: SelectionPreferences,
    pub board: CommentBoard,
    pub focus: Focus,
    /// Cursor into the flattened sidebar rows.
    pub sidebar_cursor: usize,
    /// Cursor into the sorted comment projection.
    pub comment_cursor: usize,
    /// `Some` while compose mode is capturing text into a form buffer.
    pub compose: Option<ComposeField>,
    pub confirm_quit: bool,
}

impl PortalState {
    /// Fresh session: standard catalog, seeded comments, Documents active
    /// with its first category selected.
    pub fn new() -> Self {
        let tree = ContentTree::standard();
        let mut nav = NavigationState::default();
        if let Some(first) = tree.first_category(nav.active_section) {
            nav.active_subsection = first.to_string();
        }
        PortalState {
            tree,
            nav,
            prefs: SelectionPreferences::default(),
            board: CommentBoard::seeded(),
            focus: Focus::Sidebar,
            sidebar_cursor: 0,
            comment_cursor: 0,
            compose: None,
            confirm_quit: false,
        }
    }

    /// Apply a single action. Every branch completes before control returns
    /// to the event loop; there is no partial state to observe.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SelectSection(section) => {
                debug!("switching to section {:?}", section);
                self.nav.active_section = section;
                self.nav.expanded.clear();
                self.nav.active_subsection.clear();
                // Reactive rule: seed the subsection from the new tree.
                if let Some(first) = self.tree.first_category(section) {
                    self.nav.active_subsection = first.to_string();
                }
                self.sidebar_cursor = 0;
                self.leave_suppressed_sidebar();
            }
            Action::ToggleBranch { path, name } => {
                self.nav.toggle_path(&path);
                self.nav.active_subsection = name;
                self.clamp_sidebar_cursor();
            }
            Action::SelectLeaf { name } => {
                self.nav.active_subsection = name;
            }
            Action::ToggleSidebar => {
                self.nav.sidebar_visible = !self.nav.sidebar_visible;
                self.leave_suppressed_sidebar();
            }
            Action::CycleLanguage => {
                if self.selectors_visible() {
                    self.prefs.language = self.prefs.language.next();
                }
            }
            Action::CycleApiVersion => {
                if self.version_selector_visible() {
                    self.prefs.api_version = self.prefs.api_version.next();
                }
            }
            Action::RateStar(star) => {
                self.prefs.rate(star);
            }
            Action::ToggleSortOrder => {
                self.board.toggle_sort();
            }
            Action::ToggleComment(id) => {
                self.board.toggle(id);
            }
            Action::SubmitComment { at } => {
                self.board.submit(at);
                self.clamp_comment_cursor();
            }
        }
    }

    // -- projections ------------------------------------------------------

    /// Flattened sidebar rows for the active section; empty while the
    /// sidebar is suppressed.
    pub fn visible_rows(&self) -> Vec<SidebarRow> {
        if self.nav.sidebar_suppressed() {
            return Vec::new();
        }
        match self.tree.section(self.nav.active_section) {
            Some(nodes) => content::visible_rows(nodes, &self.nav.expanded),
            None => Vec::new(),
        }
    }

    /// Content pane heading: the subsection when one is selected, otherwise
    /// the section label.
    pub fn heading(&self) -> &str {
        if self.nav.active_subsection.is_empty() {
            self.nav.active_section.label()
        } else {
            &self.nav.active_subsection
        }
    }

    /// Placeholder body line under the heading.
    pub fn body_text(&self) -> String {
        format!(
            "Content for {} in {} goes here...",
            self.heading(),
            self.nav.active_section.label()
        )
    }

    /// The language selector shows on every section except API Playground.
    pub fn selectors_visible(&self) -> bool {
        self.nav.active_section != TopSection::ApiPlayground
    }

    /// The API-version selector shows only on Documents.
    pub fn version_selector_visible(&self) -> bool {
        self.nav.active_section == TopSection::Documents
    }

    /// Id of the comment under the cursor in the sorted projection.
    pub fn selected_comment_id(&self) -> Option<u64> {
        self.board.sorted().get(self.comment_cursor).map(|c| c.id)
    }

    // -- focus ------------------------------------------------------------

    /// Move focus to the next (or previous) pane, skipping the sidebar while
    /// it is suppressed.
    pub fn cycle_focus(&mut self, forward: bool) {
        let order = [Focus::Sidebar, Focus::Content, Focus::Comments];
        let len = order.len();
        let current = order
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        let mut next = current;
        for _ in 0..len {
            next = if forward {
                (next + 1) % len
            } else {
                (next + len - 1) % len
            };
            if order[next] == Focus::Sidebar && self.nav.sidebar_suppressed() {
                continue;
            }
            self.focus = order[next];
            return;
        }
    }

    // -- cursor upkeep ----------------------------------------------------

    fn clamp_sidebar_cursor(&mut self) {
        let rows = self.visible_rows().len();
        if rows == 0 {
            self.sidebar_cursor = 0;
        } else if self.sidebar_cursor >= rows {
            self.sidebar_cursor = rows - 1;
        }
    }

    fn clamp_comment_cursor(&mut self) {
        let len = self.board.len();
        if len == 0 {
            self.comment_cursor = 0;
        } else if self.comment_cursor >= len {
            self.comment_cursor = len - 1;
        }
    }

    fn leave_suppressed_sidebar(&mut self) {
        if self.focus == Focus::Sidebar && self.nav.sidebar_suppressed() {
            self.focus = Focus::Content;
        }
    }
}

impl Default for PortalState {
    fn default() -> Self {
        PortalState::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

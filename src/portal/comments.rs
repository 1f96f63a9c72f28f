// Comment board: seeded records, trim-validated submit, per-comment
// expand toggle, and a sort projection that never reorders storage.

use chrono::{DateTime, TimeZone, Utc};
use tracing::debug;

// ---------------------------------------------------------------------------
// Comment
// ---------------------------------------------------------------------------

/// A single comment on the portal.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    /// Assigned as `len + 1` at creation. Deletion is unsupported, so ids
    /// never repeat.
    pub id: u64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// Collapsed comments show only their timestamp row.
    pub is_expanded: bool,
}

// ---------------------------------------------------------------------------
// SortOrder
// ---------------------------------------------------------------------------

/// Display ordering for the comment list, by creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest first (the default).
    #[default]
    Descending,
    Ascending,
}

impl SortOrder {
    pub fn toggled(self) -> SortOrder {
        match self {
            SortOrder::Descending => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Descending,
        }
    }
}

// ---------------------------------------------------------------------------
// CommentBoard
// ---------------------------------------------------------------------------

/// The in-memory comment collection plus the form buffers feeding it.
///
/// Storage order is insertion order and never changes; `sorted` produces
/// the display projection.
#[derive(Debug, Clone)]
pub struct CommentBoard {
    comments: Vec<Comment>,
    pub sort: SortOrder,
    /// Comment form draft text.
    pub draft: String,
    /// Decorative CAPTCHA field. Rendered and editable, never checked.
    pub captcha: String,
}

impl CommentBoard {
    /// Board with the two seed comments every session starts from.
    pub fn seeded() -> Self {
        CommentBoard {
            comments: vec![
                Comment {
                    id: 1,
                    text: "Great documentation!".to_string(),
                    created_at: Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
                    is_expanded: true,
                },
                Comment {
                    id: 2,
                    text: "Could use more examples.".to_string(),
                    created_at: Utc.with_ymd_and_hms(2024, 3, 2, 0, 0, 0).unwrap(),
                    is_expanded: true,
                },
            ],
            sort: SortOrder::default(),
            draft: String::new(),
            captcha: String::new(),
        }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    /// Submit the current draft as a new comment.
    ///
    /// Empty or whitespace-only drafts are silently dropped and the buffers
    /// are left untouched. On success the new comment is appended expanded,
    /// both form buffers are cleared, and `true` is returned.
    pub fn submit(&mut self, at: DateTime<Utc>) -> bool {
        if self.draft.trim().is_empty() {
            debug!("ignoring empty comment submission");
            return false;
        }
        let comment = Comment {
            id: self.comments.len() as u64 + 1,
            text: std::mem::take(&mut self.draft),
            created_at: at,
            is_expanded: true,
        };
        self.comments.push(comment);
        self.captcha.clear();
        true
    }

    /// Flip one comment's expansion flag. Unknown ids are ignored.
    pub fn toggle(&mut self, id: u64) {
        if let Some(comment) = self.comments.iter_mut().find(|c| c.id == id) {
            comment.is_expanded = !comment.is_expanded;
        }
    }

    pub fn toggle_sort(&mut self) {
        self.sort = self.sort.toggled();
    }

    /// The display projection: all comments ordered by creation time per the
    /// current sort direction. Storage order is untouched.
    pub fn sorted(&self) -> Vec<&Comment> {
        let mut view: Vec<&Comment> = self.comments.iter().collect();
        match self.sort {
            SortOrder::Ascending => view.sort_by_key(|c| c.created_at),
            SortOrder::Descending => {
                view.sort_by_key(|c| std::cmp::Reverse(c.created_at))
            }
        }
        view
    }
}

impl Default for CommentBoard {
    fn default() -> Self {
        CommentBoard::seeded()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

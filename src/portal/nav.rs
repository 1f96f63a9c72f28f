// Navigation state: active top section, active subsection, expansion map.

use std::collections::HashMap;

// ---------------------------------------------------------------------------
// TopSection
// ---------------------------------------------------------------------------

/// The five fixed primary navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TopSection {
    Documents,
    Articles,
    Faqs,
    ApiPlayground,
    Changelog,
}

impl TopSection {
    /// All sections in menu order.
    pub const ALL: [TopSection; 5] = [
        TopSection::Documents,
        TopSection::Articles,
        TopSection::Faqs,
        TopSection::ApiPlayground,
        TopSection::Changelog,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TopSection::Documents => "Documents",
            TopSection::Articles => "Articles",
            TopSection::Faqs => "FAQs",
            TopSection::ApiPlayground => "API Playground",
            TopSection::Changelog => "Changelog",
        }
    }

    /// Section bound to a menu digit (1-based), if in range.
    pub fn from_digit(digit: u8) -> Option<TopSection> {
        match digit {
            1..=5 => Some(Self::ALL[usize::from(digit) - 1]),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// NavigationState
// ---------------------------------------------------------------------------

/// Which section and subsection the portal is showing, plus the sidebar's
/// expansion and visibility flags.
#[derive(Debug, Clone)]
pub struct NavigationState {
    pub active_section: TopSection,
    /// Name of the selected category/leaf; empty when the section has no
    /// tree (API Playground).
    pub active_subsection: String,
    /// Dotted tree-path -> expansion flag. Collapsing a branch leaves
    /// descendant flags in place; they are simply not rendered until the
    /// branch reopens.
    pub expanded: HashMap<String, bool>,
    pub sidebar_visible: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        NavigationState {
            active_section: TopSection::Documents,
            active_subsection: String::new(),
            expanded: HashMap::new(),
            sidebar_visible: true,
        }
    }
}

impl NavigationState {
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.get(path).copied().unwrap_or(false)
    }

    /// Flip the expansion flag for a dotted path.
    pub fn toggle_path(&mut self, path: &str) {
        let flag = self.expanded.entry(path.to_string()).or_insert(false);
        *flag = !*flag;
    }

    /// The sidebar is suppressed on API Playground regardless of the
    /// visibility flag.
    pub fn sidebar_suppressed(&self) -> bool {
        self.active_section == TopSection::ApiPlayground || !self.sidebar_visible
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

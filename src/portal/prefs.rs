// Per-session selection preferences: API version, display language, rating.

/// Highest star the rating control offers.
pub const MAX_RATING: u8 = 5;

// ---------------------------------------------------------------------------
// ApiVersion
// ---------------------------------------------------------------------------

/// API version selector options. Relevant only on the Documents section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    #[default]
    V1,
    V2,
    V3,
}

impl ApiVersion {
    pub fn label(self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1.0",
            ApiVersion::V2 => "v2.0",
            ApiVersion::V3 => "v3.0",
        }
    }

    /// Next option in cycle order, wrapping at the end.
    pub fn next(self) -> ApiVersion {
        match self {
            ApiVersion::V1 => ApiVersion::V2,
            ApiVersion::V2 => ApiVersion::V3,
            ApiVersion::V3 => ApiVersion::V1,
        }
    }
}

// ---------------------------------------------------------------------------
// DisplayLanguage
// ---------------------------------------------------------------------------

/// Display language selector options. Cosmetic only; the selector is hidden
/// on API Playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayLanguage {
    #[default]
    English,
    Japanese,
    Thai,
}

impl DisplayLanguage {
    pub fn label(self) -> &'static str {
        match self {
            DisplayLanguage::English => "English",
            DisplayLanguage::Japanese => "日本語",
            DisplayLanguage::Thai => "ไทย",
        }
    }

    pub fn next(self) -> DisplayLanguage {
        match self {
            DisplayLanguage::English => DisplayLanguage::Japanese,
            DisplayLanguage::Japanese => DisplayLanguage::Thai,
            DisplayLanguage::Thai => DisplayLanguage::English,
        }
    }
}

// ---------------------------------------------------------------------------
// SelectionPreferences
// ---------------------------------------------------------------------------

/// Session-scoped selector and rating state.
#[derive(Debug, Clone, Default)]
pub struct SelectionPreferences {
    pub api_version: ApiVersion,
    pub language: DisplayLanguage,
    /// 0 means unrated; otherwise 1..=MAX_RATING.
    pub rating: u8,
}

impl SelectionPreferences {
    /// Set the rating to exactly `star`. Out-of-range values are ignored;
    /// the control only offers 1..=MAX_RATING.
    pub fn rate(&mut self, star: u8) {
        if (1..=MAX_RATING).contains(&star) {
            self.rating = star;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

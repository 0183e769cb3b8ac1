//! Match configuration.

/// Knobs that change how strictly a pattern is compared against code.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatchOptions {
    /// Compare identifier and type texts case-sensitively.
    pub case_sensitive: bool,
    /// An omitted optional pattern part matches a present code part.
    pub loose_matching: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        MatchOptions {
            case_sensitive: true,
            loose_matching: false,
        }
    }
}

impl MatchOptions {
    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    #[must_use]
    pub fn with_loose_matching(mut self, loose_matching: bool) -> Self {
        self.loose_matching = loose_matching;
        self
    }

    /// Text equality under these options.
    pub fn texts_equal(&self, a: &str, b: &str) -> bool {
        if self.case_sensitive {
            a == b
        } else {
            a.chars()
                .flat_map(char::to_lowercase)
                .eq(b.chars().flat_map(char::to_lowercase))
        }
    }
}

//! Free-text search
//!
//! The search string is split into terms on whitespace and commas. A record
//! matches when every term occurs (case-insensitively) in at least one of
//! the schema's search fields.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerms {
    terms: Vec<String>,
}

impl SearchTerms {
    /// Parse a raw search string; `None` when it holds no terms
    pub fn parse(raw: &str) -> Option<Self> {
        let terms: Vec<String> = raw
            .replace('\0', "")
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
            .collect();

        if terms.is_empty() {
            None
        } else {
            Some(Self { terms })
        }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Every term must hit at least one of `haystacks`
    pub fn matches<'a>(&self, haystacks: impl IntoIterator<Item = &'a str>) -> bool {
        let lowered: Vec<String> = haystacks.into_iter().map(str::to_lowercase).collect();
        self.terms
            .iter()
            .all(|term| lowered.iter().any(|h| h.contains(term.as_str())))
    }
}

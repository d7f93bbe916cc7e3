//! Abbreviation literals
//!
//! Abbreviations are matched case-sensitively at the cursor, before any word
//! shape gets a chance to split them. When several literals match, the longest
//! one wins, so `https` is never cut down to `http`.

/// Literal table ordered longest first
#[derive(Debug, Clone, Default)]
pub(crate) struct AbbreviationTable {
    literals: Vec<String>,
}

impl AbbreviationTable {
    /// Build from configured literals, dropping duplicates
    pub(crate) fn new<I, S>(literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut literals: Vec<String> = literals
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        literals.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        literals.dedup();
        Self { literals }
    }

    /// Byte length of the longest literal at the start of `s`
    pub(crate) fn match_at(&self, s: &str) -> Option<usize> {
        self.literals
            .iter()
            .find(|lit| s.starts_with(lit.as_str()))
            .map(String::len)
    }

    pub(crate) fn len(&self) -> usize {
        self.literals.len()
    }
}

//! Which words render in the accent color

use std::collections::HashSet;

/// Punctuation ignored at either end of a token
const STRIP: &[char] = &[',', '.', '!', '?'];

/// Case-insensitive, whole-token highlight words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightSet {
    words: HashSet<String>,
}

impl HighlightSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a comma-separated list such as `"IA, iacubateur.com"`
    pub fn from_csv(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether `token` is a highlighted word
    ///
    /// The token is lowercased and stripped of leading and trailing
    /// `, . ! ?` before comparison. Substrings never match.
    pub fn matches(&self, token: &str) -> bool {
        if self.words.is_empty() {
            return false;
        }
        let lowered = token.to_lowercase();
        self.words.contains(lowered.trim_matches(STRIP))
    }
}

//! Lexical matching primitives shared by every rule.
//!
//! Matching is plain substring containment on the trimmed, lower-cased
//! utterance. There is no tokenization: `"hey"` matches inside `"they"`
//! and `"ai"` matches inside `"explain"`. Rules depend on this behaviour.

/// Trims and lower-cases an utterance.
pub fn normalize(utterance: &str) -> String {
    utterance.trim().to_lowercase()
}

/// Returns true if the normalized utterance contains any of the keywords.
pub fn matches(utterance: &str, keywords: &[&str]) -> bool {
    Utterance::new(utterance).contains_any(keywords)
}

/// An utterance in normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    text: String,
}

impl Utterance {
    pub fn new(raw: &str) -> Self {
        Self {
            text: normalize(raw),
        }
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.text.contains(keyword)
    }

    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.text.contains(k))
    }

    pub fn is(&self, exact: &str) -> bool {
        self.text == exact
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

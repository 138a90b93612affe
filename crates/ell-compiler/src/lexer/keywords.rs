use std::collections::BTreeSet;

use thiserror::Error;

use super::classify::is_identifier;

/// Reserved words recognized when no other set is configured.
pub const DEFAULT_KEYWORDS: &[&str] = &["print", "var"];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeywordError {
    #[error("keyword '{0}' is not a valid identifier (expected [a-z_][a-z0-9_]*)")]
    NotAnIdentifier(String),
}

/// The configured set of reserved words.
///
/// Identifier-shaped words found in the set are scanned as
/// [`TokenKind::Keyword`](super::TokenKind::Keyword).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    words: BTreeSet<String>,
}

impl KeywordSet {
    /// An empty set: every word scans as an identifier.
    pub fn empty() -> Self {
        Self {
            words: BTreeSet::new(),
        }
    }

    pub fn from_words<I, S>(words: I) -> Result<Self, KeywordError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::empty();
        set.extend(words)?;
        Ok(set)
    }

    pub fn insert(&mut self, word: impl Into<String>) -> Result<bool, KeywordError> {
        let word = word.into();
        if !is_identifier(&word) {
            return Err(KeywordError::NotAnIdentifier(word));
        }
        Ok(self.words.insert(word))
    }

    pub fn extend<I, S>(&mut self, words: I) -> Result<(), KeywordError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for word in words {
            self.insert(word)?;
        }
        Ok(())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self {
            words: DEFAULT_KEYWORDS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_is_print_and_var() {
        let set = KeywordSet::default();
        assert!(set.contains("print"));
        assert!(set.contains("var"));
        assert!(!set.contains("x"));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["print", "var"]);
    }

    #[test]
    fn extend_adds_words() {
        let mut set = KeywordSet::default();
        set.extend(["if", "while"]).unwrap();
        assert_eq!(set.len(), 4);
        assert!(set.contains("while"));
    }

    #[test]
    fn insert_reports_duplicates() {
        let mut set = KeywordSet::empty();
        assert_eq!(set.insert("var"), Ok(true));
        assert_eq!(set.insert("var"), Ok(false));
    }

    #[test]
    fn rejects_words_that_never_scan_as_identifiers() {
        assert_eq!(
            KeywordSet::from_words(["var", "Print"]),
            Err(KeywordError::NotAnIdentifier("Print".to_string()))
        );
        assert!(KeywordSet::from_words(["2x"]).is_err());
        assert!(KeywordSet::from_words([""]).is_err());
    }

    #[test]
    fn empty_set() {
        let set = KeywordSet::from_words(Vec::<String>::new()).unwrap();
        assert!(set.is_empty());
    }
}

//! Stopword classification
//!
//! Wraps the English list from the `stop-words` crate, with support for
//! custom additions and removals. Keyword breakdown drops stopwords before
//! n-gram enumeration, so the list directly shapes which phrases surface.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Qualifier words that upstream lists sometimes classify as stopwords but
/// that carry real intent in a search keyword ("best italian restaurant").
const KEEP_QUALIFIERS: &[&str] = &["best", "top", "good", "great", "new", "cheap", "local"];

/// Connectives common in local-search keywords that upstream lists miss.
const EXTRA_CONNECTIVES: &[&str] = &["near", "nearby"];

/// A lowercase stopword set with membership queries.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// The English list, tuned for search keywords: intent-bearing
    /// qualifiers are kept out, geographic connectives are added.
    pub fn english() -> Self {
        let mut stopwords: FxHashSet<String> = get(LANGUAGE::English)
            .iter()
            .map(|s| s.to_lowercase())
            .collect();
        for word in KEEP_QUALIFIERS {
            stopwords.remove(*word);
        }
        for word in EXTRA_CONNECTIVES {
            stopwords.insert(word.to_string());
        }
        Self { stopwords }
    }

    /// An empty filter — nothing is classified as a stopword.
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Build a filter from a custom list.
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Add words to the filter.
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Remove words from the filter.
    pub fn remove_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.remove(&word.to_lowercase());
        }
    }

    /// Membership query. Case-insensitive.
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::english();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The")); // case insensitive
        assert!(filter.is_stopword("is"));
        assert!(filter.is_stopword("a"));
        assert!(filter.is_stopword("near"));
        assert!(!filter.is_stopword("restaurant"));
        assert!(!filter.is_stopword("plumber"));
    }

    #[test]
    fn test_qualifiers_are_not_stopwords() {
        let filter = StopwordFilter::english();
        for word in KEEP_QUALIFIERS {
            assert!(!filter.is_stopword(word), "{word} should not be a stopword");
        }
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));

        filter.remove_stopwords(&["custom"]);
        assert!(!filter.is_stopword("custom"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }
}

//! Core types shared across the crate
//!
//! A keyword phrase is annotated into a sequence of [`Token`]s, each carrying
//! a coarse [`PosTag`] plus stopword / alphabetic flags. Everything here is
//! transient — computed per invocation, never persisted.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech category assigned to a token.
///
/// The tag set is deliberately small: the plausibility predicate only ever
/// distinguishes adjectives and nouns from everything else, so finer
/// distinctions (tense, number, proper vs. common) buy nothing here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosTag {
    Noun,
    Adjective,
    Verb,
    Adverb,
    Determiner,
    Preposition,
    Pronoun,
    Conjunction,
    Number,
    Other,
}

impl PosTag {
    /// Returns `true` for tags a natural phrase may start with.
    pub fn can_open_phrase(&self) -> bool {
        matches!(self, PosTag::Adjective | PosTag::Noun)
    }

    /// Returns `true` for tags a natural phrase must end with.
    pub fn can_close_phrase(&self) -> bool {
        matches!(self, PosTag::Noun)
    }

    /// The user-facing name used in lexicon files and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Adjective => "ADJ",
            PosTag::Verb => "VERB",
            PosTag::Adverb => "ADV",
            PosTag::Determiner => "DET",
            PosTag::Preposition => "ADP",
            PosTag::Pronoun => "PRON",
            PosTag::Conjunction => "CONJ",
            PosTag::Number => "NUM",
            PosTag::Other => "X",
        }
    }

    /// Parse a tag name as written in a lexicon file. Case-insensitive.
    pub fn parse(name: &str) -> Option<Self> {
        let tag = match name.to_ascii_uppercase().as_str() {
            "NOUN" | "PROPN" => PosTag::Noun,
            "ADJ" | "ADJECTIVE" => PosTag::Adjective,
            "VERB" | "AUX" => PosTag::Verb,
            "ADV" | "ADVERB" => PosTag::Adverb,
            "DET" | "DETERMINER" => PosTag::Determiner,
            "ADP" | "PREP" | "PREPOSITION" => PosTag::Preposition,
            "PRON" | "PRONOUN" => PosTag::Pronoun,
            "CONJ" | "CCONJ" | "SCONJ" => PosTag::Conjunction,
            "NUM" | "NUMBER" => PosTag::Number,
            "X" | "OTHER" => PosTag::Other,
            _ => return None,
        };
        Some(tag)
    }
}

/// One annotated word of a keyword phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form, lowercased.
    pub text: String,
    /// Coarse part-of-speech tag.
    pub pos: PosTag,
    /// Whether the token appears in the active stopword list.
    pub is_stopword: bool,
    /// Whether the token consists entirely of alphabetic characters.
    pub is_alpha: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: PosTag, is_stopword: bool, is_alpha: bool) -> Self {
        Self {
            text: text.into(),
            pos,
            is_stopword,
            is_alpha,
        }
    }
}

/// An ordered sequence of unique non-empty strings.
///
/// Preserves first-occurrence order on insert — the ordering contract the
/// anchor composer needs, which a plain `HashSet` cannot give and a sorted
/// set would destroy.
#[derive(Debug, Clone, Default)]
pub struct OrderedSet {
    items: Vec<String>,
    seen: rustc_hash::FxHashSet<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a candidate, keeping only the first occurrence of each string.
    /// Empty strings are rejected. Returns `true` if the item was added.
    pub fn insert(&mut self, item: impl Into<String>) -> bool {
        let item = item.into();
        if item.is_empty() || self.seen.contains(&item) {
            return false;
        }
        self.seen.insert(item.clone());
        self.items.push(item);
        true
    }

    pub fn contains(&self, item: &str) -> bool {
        self.seen.contains(item)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Consume the set, yielding items in insertion order.
    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}

impl From<OrderedSet> for Vec<String> {
    fn from(set: OrderedSet) -> Self {
        set.into_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pos_tag_roundtrip() {
        for tag in [
            PosTag::Noun,
            PosTag::Adjective,
            PosTag::Verb,
            PosTag::Adverb,
            PosTag::Determiner,
            PosTag::Preposition,
            PosTag::Pronoun,
            PosTag::Conjunction,
            PosTag::Number,
            PosTag::Other,
        ] {
            assert_eq!(PosTag::parse(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn test_pos_tag_parse_aliases() {
        assert_eq!(PosTag::parse("propn"), Some(PosTag::Noun));
        assert_eq!(PosTag::parse("adjective"), Some(PosTag::Adjective));
        assert_eq!(PosTag::parse("bogus"), None);
    }

    #[test]
    fn test_phrase_boundary_predicates() {
        assert!(PosTag::Noun.can_open_phrase());
        assert!(PosTag::Adjective.can_open_phrase());
        assert!(!PosTag::Verb.can_open_phrase());

        assert!(PosTag::Noun.can_close_phrase());
        assert!(!PosTag::Adjective.can_close_phrase());
    }

    #[test]
    fn test_ordered_set_keeps_first_occurrence() {
        let mut set = OrderedSet::new();
        assert!(set.insert("b"));
        assert!(set.insert("a"));
        assert!(!set.insert("b"));
        assert!(set.insert("c"));

        let items: Vec<_> = set.iter().collect();
        assert_eq!(items, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_ordered_set_rejects_empty() {
        let mut set = OrderedSet::new();
        assert!(!set.insert(""));
        assert!(set.is_empty());
    }
}

//! Closed-class word lexicon
//!
//! Maps function words (determiners, prepositions, pronouns, auxiliaries)
//! and a handful of high-frequency qualifiers to their part-of-speech tags.
//! Open-class words are intentionally absent — the tagger resolves those
//! with suffix heuristics and an all-else-fails Noun default.
//!
//! A custom table can be loaded from any reader in a `word<ws>TAG` line
//! format (`#` comments and blank lines ignored). Loading is the only
//! fallible operation in the crate and happens once at process start.

use std::io::BufRead;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::types::PosTag;

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "some", "any", "every", "each", "no",
    "all", "both", "either", "neither",
];

const PREPOSITIONS: &[&str] = &[
    "near", "in", "on", "at", "for", "with", "from", "to", "of", "by", "about", "over", "under",
    "between", "through", "during", "without", "within", "across", "behind", "around",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "because", "while", "although",
];

const VERBS: &[&str] = &[
    "is", "are", "was", "were", "am", "be", "been", "being", "do", "does", "did", "have", "has",
    "had", "will", "would", "can", "could", "shall", "should", "may", "might", "must", "get",
    "got", "need", "want", "find", "buy", "hire", "book", "call", "fix", "repair",
];

const ADJECTIVES: &[&str] = &[
    "best", "top", "good", "great", "cheap", "affordable", "fast", "reliable", "local",
    "professional", "certified", "licensed", "emergency", "quick", "easy", "free", "premium",
    "luxury", "modern", "small", "large", "big", "open",
];

const ADVERBS: &[&str] = &[
    "very", "really", "quite", "too", "also", "just", "only", "now", "here", "there",
];

/// Failure to load a custom lexicon table. Fatal at startup by contract —
/// the tagger is built once and never reloaded per call.
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: missing tag for word {word:?}")]
    MissingTag { line: usize, word: String },

    #[error("line {line}: unknown tag {tag:?}")]
    UnknownTag { line: usize, tag: String },
}

/// Word-to-tag table consulted before any heuristic rule fires.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: FxHashMap<String, PosTag>,
}

impl Lexicon {
    /// The built-in English closed-class table. Infallible.
    pub fn builtin() -> Self {
        let mut lexicon = Self::default();
        lexicon.insert_all(DETERMINERS, PosTag::Determiner);
        lexicon.insert_all(PREPOSITIONS, PosTag::Preposition);
        lexicon.insert_all(PRONOUNS, PosTag::Pronoun);
        lexicon.insert_all(CONJUNCTIONS, PosTag::Conjunction);
        lexicon.insert_all(VERBS, PosTag::Verb);
        lexicon.insert_all(ADJECTIVES, PosTag::Adjective);
        lexicon.insert_all(ADVERBS, PosTag::Adverb);
        lexicon
    }

    /// Load a table from a reader. Lines are `word<ws>TAG`; `#` starts a
    /// comment; blank lines are skipped. Later entries win on duplicates.
    pub fn from_reader(reader: impl BufRead) -> Result<Self, LexiconError> {
        let mut lexicon = Self::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let mut parts = line.split_whitespace();
            // split_whitespace on a non-empty trimmed line always yields at
            // least one item.
            let word = parts.next().unwrap_or("");
            let tag = parts.next().ok_or_else(|| LexiconError::MissingTag {
                line: idx + 1,
                word: word.to_string(),
            })?;
            let tag = PosTag::parse(tag).ok_or_else(|| LexiconError::UnknownTag {
                line: idx + 1,
                tag: tag.to_string(),
            })?;
            lexicon.insert(word, tag);
        }
        Ok(lexicon)
    }

    /// Add or overwrite one entry. The word is stored lowercased.
    pub fn insert(&mut self, word: &str, tag: PosTag) {
        self.entries.insert(word.to_lowercase(), tag);
    }

    fn insert_all(&mut self, words: &[&str], tag: PosTag) {
        for word in words {
            self.entries.insert((*word).to_string(), tag);
        }
    }

    /// Overlay another table onto this one; the other table wins on
    /// conflicting words.
    pub fn merge(&mut self, other: Lexicon) {
        self.entries.extend(other.entries);
    }

    /// Look up a word. Case-insensitive.
    pub fn lookup(&self, word: &str) -> Option<PosTag> {
        self.entries.get(&word.to_lowercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

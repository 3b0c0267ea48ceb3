//! Part-of-speech tagging
//!
//! The [`Tagger`] trait is the seam the phrase pipeline is written against.
//! The shipped implementation, [`LexiconTagger`], is a fixed, inspectable
//! rule stack: closed-class lexicon lookup, then a digit check, then suffix
//! heuristics, then a Noun default. Short search keywords are overwhelmingly
//! nominal, so the default is right far more often than it is wrong.
//!
//! The tagger is built once per process ([`LexiconTagger::shared`]) and read
//! concurrently without locking; nothing in it mutates after construction.

use once_cell::sync::Lazy;

use super::lexicon::{Lexicon, LexiconError};
use super::stopwords::StopwordFilter;
use crate::types::{PosTag, Token};

/// Adjective-forming suffixes checked after lexicon lookup. Order matters:
/// longer suffixes first so "able" wins over a hypothetical shorter match.
const ADJECTIVE_SUFFIXES: &[&str] = &["able", "ible", "less", "ous", "ful", "ish", "ive", "est"];

/// Classification capability for one English word / phrase.
///
/// Implementations must be cheap, deterministic, and safe to share across
/// threads; the pipeline re-tags tokens per candidate phrase.
pub trait Tagger: Send + Sync {
    /// Tag a single word.
    fn tag(&self, word: &str) -> PosTag;

    /// Tokenize a phrase and annotate every token with its tag plus
    /// stopword / alphabetic flags.
    fn annotate(&self, text: &str) -> Vec<Token>;
}

/// Rule-based tagger backed by a [`Lexicon`] and a [`StopwordFilter`].
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    lexicon: Lexicon,
    stopwords: StopwordFilter,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new(Lexicon::builtin(), StopwordFilter::english())
    }
}

impl LexiconTagger {
    pub fn new(lexicon: Lexicon, stopwords: StopwordFilter) -> Self {
        Self { lexicon, stopwords }
    }

    /// Build a tagger from a custom lexicon table. The only fallible
    /// constructor; a bad table aborts startup rather than surfacing
    /// per-call errors later.
    pub fn from_lexicon_reader(reader: impl std::io::BufRead) -> Result<Self, LexiconError> {
        let mut lexicon = Lexicon::builtin();
        let custom = Lexicon::from_reader(reader)?;
        lexicon.merge(custom);
        Ok(Self::new(lexicon, StopwordFilter::english()))
    }

    /// The process-wide shared instance: constructed on first use,
    /// immutable thereafter, lock-free to read.
    pub fn shared() -> &'static LexiconTagger {
        static SHARED: Lazy<LexiconTagger> = Lazy::new(LexiconTagger::default);
        &SHARED
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, word: &str) -> PosTag {
        let word = word.to_lowercase();
        if let Some(tag) = self.lexicon.lookup(&word) {
            return tag;
        }
        if word.chars().all(|c| c.is_ascii_digit()) && !word.is_empty() {
            return PosTag::Number;
        }
        if word.len() > 3 && word.ends_with("ly") {
            return PosTag::Adverb;
        }
        if word.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
            return PosTag::Adjective;
        }
        PosTag::Noun
    }

    fn annotate(&self, text: &str) -> Vec<Token> {
        tokenize(text)
            .into_iter()
            .map(|word| {
                let is_alpha = !word.is_empty() && word.chars().all(char::is_alphabetic);
                let is_stopword = self.stopwords.is_stopword(&word);
                let pos = self.tag(&word);
                Token::new(word, pos, is_stopword, is_alpha)
            })
            .collect()
    }
}

/// Split a phrase into lowercase word tokens.
///
/// Whitespace-delimited, with leading/trailing punctuation stripped from
/// each token ("plumber," → "plumber"). Tokens that are pure punctuation
/// disappear entirely.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|raw| {
            raw.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

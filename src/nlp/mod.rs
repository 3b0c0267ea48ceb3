//! Natural Language Processing components
//!
//! Tokenization, stopword classification, and rule-based part-of-speech
//! tagging — the injected collaborator the phrase pipeline runs against.

pub mod lexicon;
pub mod stopwords;
pub mod tagger;

pub use lexicon::{Lexicon, LexiconError};
pub use stopwords::StopwordFilter;
pub use tagger::{tokenize, LexiconTagger, Tagger};

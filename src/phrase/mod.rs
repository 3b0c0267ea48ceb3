//! Keyword sub-phrase extraction
//!
//! Pipeline B: normalize a keyword into content tokens, enumerate its
//! contiguous n-grams, keep the grammatically plausible ones, and rank
//! them by length.

pub mod filter;
pub mod ngram;
pub mod ranker;

pub use filter::{filter_candidates, is_plausible};
pub use ngram::{extract, normalize, normalized_text, NGramCandidate};
pub use ranker::rank;

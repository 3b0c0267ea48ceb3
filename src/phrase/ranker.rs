//! Phrase ranking
//!
//! Orders surviving candidates by descending word count with a stable
//! sort, so ties keep their enumeration order (ascending length, then
//! ascending start index — which the extractor already guarantees).
//! Duplicates are deliberately kept; dedup is an anchor/brand concern.

use std::cmp::Reverse;

use super::ngram::NGramCandidate;

/// Stable descending sort by word count.
pub fn rank(mut candidates: Vec<NGramCandidate>) -> Vec<NGramCandidate> {
    candidates.sort_by_key(|c| Reverse(c.words));
    candidates
}

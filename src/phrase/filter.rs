//! Phrase plausibility filtering
//!
//! A sub-phrase "sounds natural" when it opens with an adjective or noun
//! and closes with a noun — the shape of an English noun phrase once
//! stopwords are gone. Each candidate's tokens are re-tagged here; the
//! filter does not trust annotations from earlier stages.

use super::ngram::NGramCandidate;
use crate::nlp::Tagger;

/// The plausibility predicate for one candidate phrase.
///
/// All must hold: at least two words; the first word opens a phrase
/// (adjective or noun); the last word is a noun; the candidate differs
/// from the full normalized input.
pub fn is_plausible(tagger: &dyn Tagger, phrase: &str, normalized: &str) -> bool {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    let (Some(first), Some(last)) = (words.first(), words.last()) else {
        return false;
    };
    words.len() >= 2
        && tagger.tag(first).can_open_phrase()
        && tagger.tag(last).can_close_phrase()
        && phrase != normalized
}

/// Keep the candidates that satisfy [`is_plausible`], preserving
/// enumeration order.
pub fn filter_candidates(
    tagger: &dyn Tagger,
    candidates: Vec<NGramCandidate>,
    normalized: &str,
) -> Vec<NGramCandidate> {
    candidates
        .into_iter()
        .filter(|c| is_plausible(tagger, &c.phrase, normalized))
        .collect()
}

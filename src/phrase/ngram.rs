//! N-gram enumeration
//!
//! Normalizes an annotated keyword (alphabetic non-stopword tokens only)
//! and enumerates every contiguous sub-phrase of two or more words. The
//! candidate equal to the full normalized sequence is never emitted; the
//! plausibility filter later rejects it by string comparison as well.

use crate::nlp::Tagger;
use crate::types::Token;

/// A candidate sub-phrase with its word count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NGramCandidate {
    pub phrase: String,
    pub words: usize,
}

impl NGramCandidate {
    pub fn new(phrase: impl Into<String>, words: usize) -> Self {
        Self {
            phrase: phrase.into(),
            words,
        }
    }
}

/// Annotate a raw keyword and keep only alphabetic non-stopword tokens,
/// preserving relative order.
pub fn normalize(tagger: &dyn Tagger, keyword: &str) -> Vec<Token> {
    tagger
        .annotate(keyword)
        .into_iter()
        .filter(|t| t.is_alpha && !t.is_stopword)
        .collect()
}

/// The normalized sequence joined by spaces — the reference string no
/// candidate may equal.
pub fn normalized_text(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Enumerate contiguous sub-phrases: outer loop over length n ascending
/// from 2, inner loop over start index ascending. Lengths stop short of
/// the full sequence, so no candidate reproduces it. Fewer than three
/// normalized tokens yield nothing.
pub fn extract(tokens: &[Token]) -> Vec<NGramCandidate> {
    let mut candidates = Vec::new();
    for n in 2..tokens.len() {
        for start in 0..=tokens.len() - n {
            let phrase = tokens[start..start + n]
                .iter()
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            candidates.push(NGramCandidate::new(phrase, n));
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::LexiconTagger;
    use crate::types::PosTag;

    fn noun(text: &str) -> Token {
        Token::new(text, PosTag::Noun, false, true)
    }

    #[test]
    fn test_normalize_drops_stopwords_and_non_alpha() {
        let tagger = LexiconTagger::default();
        let tokens = normalize(&tagger, "the best 24 emergency plumber in austin");
        let texts: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["best", "emergency", "plumber", "austin"]);
    }

    #[test]
    fn test_enumeration_order() {
        let tokens = vec![noun("a"), noun("b"), noun("c"), noun("d")];
        let phrases: Vec<_> = extract(&tokens).into_iter().map(|c| c.phrase).collect();
        assert_eq!(
            phrases,
            vec!["a b", "b c", "c d", "a b c", "b c d"]
        );
    }

    #[test]
    fn test_full_sequence_never_emitted() {
        let tokens = vec![noun("a"), noun("b"), noun("c")];
        let full = normalized_text(&tokens);
        assert!(extract(&tokens).iter().all(|c| c.phrase != full));
    }

    #[test]
    fn test_short_sequences_yield_nothing() {
        assert!(extract(&[]).is_empty());
        assert!(extract(&[noun("a")]).is_empty());
        // The only 2-gram of a 2-token sequence is the full sequence.
        assert!(extract(&[noun("a"), noun("b")]).is_empty());
    }

    #[test]
    fn test_word_counts() {
        let tokens = vec![noun("a"), noun("b"), noun("c"), noun("d")];
        for candidate in extract(&tokens) {
            assert_eq!(
                candidate.words,
                candidate.phrase.split_whitespace().count()
            );
        }
    }
}

//! Pipeline entry points
//!
//! Thin orchestration over the pure components: anchor generation
//! (segmenter + composer + brand splitter) and keyword breakdown
//! (normalize + n-grams + plausibility filter + ranker). Batch variants
//! fan keywords out across threads; the shared tagger is read-only, so no
//! synchronization is needed.

use rayon::prelude::*;
use thiserror::Error;

use super::response::{AnchorRequest, AnchorResponse};
use crate::anchors;
use crate::brand::{brand_variants, DomainBase};
use crate::nlp::{tokenize, LexiconTagger, Tagger};
use crate::phrase;

/// Enter a tracing span for a pipeline stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler
/// eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Runtime limits for the breakdown pipeline.
///
/// N-gram enumeration is quadratic in token count — fine for a handful of
/// words, unbounded on adversarial input. `max_tokens` caps the raw token
/// count before any work happens; `None` (the default) accepts anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreakdownConfig {
    pub max_tokens: Option<usize>,
}

impl BreakdownConfig {
    /// Cap the number of raw input tokens.
    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// The only error the pipeline layer can produce. Degenerate input never
/// errors; only the explicit token cap does.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error("keyword has {count} tokens, limit is {limit}")]
    TooManyTokens { count: usize, limit: usize },
}

/// Generate the anchor response for one keyword/domain pair.
///
/// Infallible: empty or whitespace-only input degrades to empty fields.
pub fn generate_anchors(request: &AnchorRequest) -> AnchorResponse {
    let keyword = request.keyword.trim().to_lowercase();
    let words: Vec<&str> = keyword.split_whitespace().collect();

    trace_stage!("segment");
    let segments = anchors::segment(&words);

    trace_stage!("compose");
    let topic_anchors = anchors::compose(&keyword, &words, &segments);

    trace_stage!("brand");
    let domain = DomainBase::parse(&request.domain);
    let mut brand = brand_variants(&domain);
    brand.sort_unstable();

    AnchorResponse {
        exact_match: keyword,
        topic_anchors,
        brand,
    }
}

/// Break a keyword down into its ranked natural-sounding sub-phrases.
pub fn breakdown(
    tagger: &dyn Tagger,
    keyword: &str,
    config: &BreakdownConfig,
) -> Result<Vec<String>, PipelineError> {
    if let Some(limit) = config.max_tokens {
        let count = tokenize(keyword).len();
        if count > limit {
            return Err(PipelineError::TooManyTokens { count, limit });
        }
    }

    trace_stage!("normalize");
    let tokens = phrase::normalize(tagger, keyword);
    let normalized = phrase::normalized_text(&tokens);

    trace_stage!("ngrams");
    let candidates = phrase::extract(&tokens);

    trace_stage!("filter");
    let kept = phrase::filter_candidates(tagger, candidates, &normalized);

    trace_stage!("rank");
    Ok(phrase::rank(kept).into_iter().map(|c| c.phrase).collect())
}

/// Breakdown against the process-wide shared tagger with no token cap.
/// Infallible: the cap is the only error source and it is unset here.
pub fn breakdown_default(keyword: &str) -> Vec<String> {
    breakdown(LexiconTagger::shared(), keyword, &BreakdownConfig::default())
        .unwrap_or_default()
}

/// Anchor generation over a batch of requests, in parallel. Output order
/// matches input order.
pub fn generate_anchors_batch(requests: &[AnchorRequest]) -> Vec<AnchorResponse> {
    requests.par_iter().map(generate_anchors).collect()
}

/// Breakdown over a batch of keywords, in parallel against the shared
/// tagger. Per-keyword results keep their input position.
pub fn breakdown_batch(
    keywords: &[String],
    config: &BreakdownConfig,
) -> Vec<Result<Vec<String>, PipelineError>> {
    keywords
        .par_iter()
        .map(|keyword| breakdown(LexiconTagger::shared(), keyword, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(keyword: &str, domain: &str) -> AnchorRequest {
        AnchorRequest {
            keyword: keyword.to_string(),
            domain: domain.to_string(),
        }
    }

    #[test]
    fn test_end_to_end_anchor_example() {
        let response = generate_anchors(&request(
            "Best Italian Restaurant Near Boston MA",
            "https://www.tastybites.com",
        ));

        assert_eq!(response.exact_match, "best italian restaurant near boston ma");
        assert_eq!(
            response.topic_anchors,
            vec![
                "best italian restaurant near boston ma",
                "near boston ma best italian restaurant",
                "best italian restaurant",
            ]
        );
        assert!(response.brand.contains(&"tastybites".to_string()));
    }

    #[test]
    fn test_anchor_generation_never_fails_on_degenerate_input() {
        let response = generate_anchors(&request("   ", ""));
        assert_eq!(response.exact_match, "");
        assert!(response.topic_anchors.is_empty());
        assert!(response.brand.is_empty());
    }

    #[test]
    fn test_multibyte_input_never_panics() {
        let response = generate_anchors(&request(
            "Café Zürich Öffnungszeiten",
            "wwwü.com",
        ));
        assert_eq!(response.exact_match, "café zürich öffnungszeiten");
        assert_eq!(response.topic_anchors[0], response.exact_match);
        assert!(response.brand.contains(&"wwwü".to_string()));

        let phrases = breakdown_default("best café zürich centre open späti now");
        for phrase in &phrases {
            assert!(phrase.split_whitespace().count() >= 2);
        }
    }

    #[test]
    fn test_breakdown_phrases_satisfy_predicate() {
        let tagger = LexiconTagger::default();
        let keyword = "best italian restaurant near boston ma";
        let phrases = breakdown(&tagger, keyword, &BreakdownConfig::default()).unwrap();

        let normalized = phrase::normalized_text(&phrase::normalize(&tagger, keyword));
        assert!(!phrases.is_empty());
        for phrase in &phrases {
            let words: Vec<&str> = phrase.split_whitespace().collect();
            assert!(words.len() >= 2);
            assert!(tagger.tag(words[0]).can_open_phrase());
            assert!(tagger.tag(words[words.len() - 1]).can_close_phrase());
            assert_ne!(*phrase, normalized);
        }
        // Ranked: non-increasing word count.
        let counts: Vec<_> = phrases
            .iter()
            .map(|p| p.split_whitespace().count())
            .collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_breakdown_degrades_to_empty() {
        assert!(breakdown_default("").is_empty());
        assert!(breakdown_default("plumber").is_empty());
        assert!(breakdown_default("the of and").is_empty());
    }

    #[test]
    fn test_token_cap() {
        let config = BreakdownConfig::default().with_max_tokens(3);
        let err = breakdown(LexiconTagger::shared(), "one two three four", &config)
            .unwrap_err();
        assert_eq!(err, PipelineError::TooManyTokens { count: 4, limit: 3 });

        assert!(breakdown(LexiconTagger::shared(), "one two three", &config).is_ok());
    }

    #[test]
    fn test_batch_preserves_order() {
        let requests = vec![
            request("dental implants", "datacamp.com"),
            request("emergency plumber austin tx", "medspa.io"),
        ];
        let responses = generate_anchors_batch(&requests);
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].exact_match, "dental implants");
        assert_eq!(responses[1].exact_match, "emergency plumber austin tx");

        let keywords = vec![
            "best italian restaurant near boston ma".to_string(),
            String::new(),
        ];
        let results = breakdown_batch(&keywords, &BreakdownConfig::default());
        assert!(!results[0].as_ref().unwrap().is_empty());
        assert!(results[1].as_ref().unwrap().is_empty());
    }
}

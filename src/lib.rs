//! # keywordsmith
//!
//! Heuristic decomposition of short local-search keywords for SEO
//! link-building: anchor-text synthesis, brand-name splitting, and
//! natural-sounding sub-phrase enumeration.
//!
//! Three independent pure pipelines:
//!
//! - **Anchor generation** — segment a keyword into service and location
//!   phrases by position-count rules, then compose an ordered,
//!   deduplicated anchor candidate list.
//! - **Brand splitting** — derive plausible human-readable spellings of a
//!   concatenated domain base (camelCase boundaries, a curated compound
//!   lexicon, a generic lowercase-run fallback).
//! - **Keyword breakdown** — enumerate a keyword's content-word n-grams,
//!   keep the ones shaped like English noun phrases, rank by length.
//!
//! Everything is fixed, inspectable heuristics — no network, no persisted
//! state, no statistical model. The part-of-speech capability is a
//! process-wide read-only resource built once at startup.
//!
//! ## Quick start
//!
//! ```rust
//! use keywordsmith::pipeline::{generate_anchors, breakdown_default, AnchorRequest};
//!
//! let response = generate_anchors(&AnchorRequest {
//!     keyword: "best italian restaurant near boston ma".to_string(),
//!     domain: "https://www.tastybites.com".to_string(),
//! });
//! assert_eq!(response.topic_anchors[0], response.exact_match);
//!
//! let phrases = breakdown_default("best italian restaurant near boston ma");
//! assert!(phrases.iter().all(|p| p.split_whitespace().count() >= 2));
//! ```

pub mod anchors;
pub mod brand;
pub mod nlp;
pub mod phrase;
pub mod pipeline;
pub mod types;

pub use brand::{brand_variants, DomainBase};
pub use nlp::{LexiconTagger, Tagger};
pub use pipeline::{
    breakdown, breakdown_default, generate_anchors, AnchorRequest, AnchorResponse,
    BreakdownConfig, PipelineError,
};
pub use types::{PosTag, Token};

//! Brand-name derivation
//!
//! Normalizes a raw domain to its base label and derives the set of
//! plausible human-readable brand spellings. Independent of the keyword
//! pipelines.

pub mod domain;
pub mod splitter;

pub use domain::DomainBase;
pub use splitter::brand_variants;

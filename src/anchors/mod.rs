//! Anchor-text generation
//!
//! Pipeline A: segment a local-search keyword into service and location
//! phrases, then compose the ordered, deduplicated anchor candidate list.

pub mod composer;
pub mod segmenter;

pub use composer::compose;
pub use segmenter::{segment, Segments};

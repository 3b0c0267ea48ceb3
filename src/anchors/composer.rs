//! Anchor-text composition
//!
//! Builds the ordered candidate list of anchor strings for a segmented
//! keyword and deduplicates it with first-occurrence ordering. The exact
//! keyword always leads; reorderings and partials follow.

use super::segmenter::Segments;
use crate::types::OrderedSet;

/// Compose the deduplicated anchor list for a keyword.
///
/// With a location present, the candidates are the exact keyword, the
/// location-first reordering, the service-first form, and the bare service.
/// Without one, positional fallbacks over the word list stand in for the
/// missing geography. Duplicates collapse to their first occurrence and
/// empty candidates are dropped, so the head of a non-empty result is
/// always the keyword itself.
pub fn compose(keyword: &str, words: &[&str], segments: &Segments) -> Vec<String> {
    let mut anchors = OrderedSet::new();

    if segments.has_location() {
        anchors.insert(keyword);
        anchors.insert(format!("{} {}", segments.location, segments.service));
        anchors.insert(format!("{} {}", segments.service, segments.location));
        anchors.insert(segments.service.clone());
    } else {
        anchors.insert(keyword);
        anchors.insert(words.join(" "));
        anchors.insert(words.get(1..).unwrap_or(&[]).join(" "));
        anchors.insert(words[..words.len().min(2)].join(" "));
    }

    anchors.into_vec()
}

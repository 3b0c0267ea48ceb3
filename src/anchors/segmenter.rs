//! Service / location segmentation
//!
//! Splits a local-search keyword into its intent-bearing service phrase and
//! its trailing geographic qualifier with fixed position-count rules: the
//! longer the keyword, the more trailing words are assumed to be geography
//! ("best italian restaurant | near boston ma").

/// A keyword split into service and location phrases. `location` is empty
/// when the keyword is too short to carry a geographic tail.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Segments {
    pub service: String,
    pub location: String,
}

impl Segments {
    pub fn has_location(&self) -> bool {
        !self.location.is_empty()
    }
}

/// Segment a tokenized keyword by position-count rules, in priority order:
///
/// - 5+ words: the last 3 are the location
/// - 4 words: the last 2 are the location
/// - fewer: everything is service, location is empty
///
/// Never fails; an empty slice yields two empty strings.
pub fn segment(words: &[&str]) -> Segments {
    let tail = match words.len() {
        n if n >= 5 => 3,
        n if n >= 4 => 2,
        _ => 0,
    };
    let split = words.len() - tail;
    Segments {
        service: words[..split].join(" "),
        location: words[split..].join(" "),
    }
}

//! Brand-name splitting
//!
//! Derives plausible human-readable spellings of a concatenated domain
//! base ("tastybites" → "tasty bites" territory) with three independent
//! heuristics: camelCase boundaries, a curated compound lexicon, and a
//! first-boundary fallback between long lowercase runs. All variants are
//! collected with set semantics; the original base is always present.

use super::domain::DomainBase;
use crate::types::OrderedSet;

/// Known compound brand roots with an explicit split offset (in bytes from
/// the root's start). Each root carries its own split point; roots too
/// short to split meaningfully simply never enter this table.
const COMPOUND_LEXICON: &[(&str, usize)] = &[
    ("medspa", 3),
    ("datacamp", 4),
    ("healthcare", 6),
    ("webdesign", 3),
];

/// Minimum lowercase-run length on each side of a generic split boundary.
const MIN_RUN: usize = 3;

/// Produce the set of brand-name variants for a domain base.
///
/// Insertion order is an implementation detail; callers needing a stable
/// serialization should sort. The result always contains the lowercase
/// base itself (unless it is empty), never duplicates, never empty
/// strings. Deterministic for identical input.
pub fn brand_variants(domain: &DomainBase) -> Vec<String> {
    let base = domain.as_str();
    let mut variants = OrderedSet::new();
    variants.insert(base);

    if let Some(split) = camel_case_split(domain.original()) {
        variants.insert(split);
    }
    for variant in compound_splits(base) {
        variants.insert(variant);
    }
    if let Some(split) = generic_split(base) {
        variants.insert(split);
    }

    variants.into_vec()
}

/// Insert a space at every lowercase→uppercase boundary of the original
/// spelling, then lowercase. Returns `None` when no boundary exists —
/// including when the input was lowercased upstream and the heuristic
/// cannot fire.
fn camel_case_split(original: &str) -> Option<String> {
    let mut out = String::with_capacity(original.len() + 4);
    let mut boundaries = 0;
    let mut prev_lower = false;
    for c in original.chars() {
        if prev_lower && c.is_uppercase() {
            out.push(' ');
            boundaries += 1;
        }
        prev_lower = c.is_lowercase();
        out.extend(c.to_lowercase());
    }
    (boundaries > 0).then(|| out)
}

/// For every lexicon root occurring in the base, split each occurrence at
/// the root's recorded offset. One variant per matching root.
fn compound_splits(base: &str) -> Vec<String> {
    let mut out = Vec::new();
    for (root, split) in COMPOUND_LEXICON {
        if base.contains(root) {
            let spaced = format!("{} {}", &root[..*split], &root[*split..]);
            let variant = base.replace(root, &spaced);
            if variant != base {
                out.push(variant);
            }
        }
    }
    out
}

/// Split at the first (lowest-index) boundary with at least [`MIN_RUN`]
/// lowercase ASCII letters on each side. First match only; an explicit
/// linear scan, deliberately not a pattern engine.
fn generic_split(base: &str) -> Option<String> {
    let chars: Vec<char> = base.chars().collect();
    if chars.len() < 2 * MIN_RUN {
        return None;
    }
    for i in MIN_RUN..=chars.len() - MIN_RUN {
        let left = &chars[i - MIN_RUN..i];
        let right = &chars[i..i + MIN_RUN];
        if left.iter().chain(right).all(|c| c.is_ascii_lowercase()) {
            let mut out: String = chars[..i].iter().collect();
            out.push(' ');
            out.extend(&chars[i..]);
            return Some(out);
        }
    }
    None
}

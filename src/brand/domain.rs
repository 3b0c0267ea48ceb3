//! Domain-name normalization
//!
//! Reduces a raw domain (possibly a full URL) to its brand-bearing base:
//! the label before the first dot, with scheme and `www.` stripped. The
//! original casing is retained alongside the lowercase base because the
//! camelCase brand heuristic can only fire on the original spelling.

/// The brand-bearing portion of a domain name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainBase {
    /// Base label with the input's original casing (camelCase intact).
    original: String,
    /// Lowercased base label — every produced brand variant derives from
    /// this form.
    base: String,
}

impl DomainBase {
    /// Parse a raw domain or URL. Never fails; degenerate input yields an
    /// empty base.
    pub fn parse(raw: &str) -> Self {
        let mut rest = raw.trim();
        for scheme in ["https://", "http://"] {
            if let Some(stripped) = strip_prefix_ignore_ascii_case(rest, scheme) {
                rest = stripped;
                break;
            }
        }
        if let Some(stripped) = strip_prefix_ignore_ascii_case(rest, "www.") {
            rest = stripped;
        }
        let original = rest.split('.').next().unwrap_or("").to_string();
        let base = original.to_lowercase();
        Self { original, base }
    }

    /// The original-case base label.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The lowercase base label.
    pub fn as_str(&self) -> &str {
        &self.base
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }
}

/// ASCII-case-insensitive prefix strip, safe on multibyte input.
///
/// `str::get` refuses offsets inside a multibyte character, so a domain
/// like "wwwü.com" simply fails the prefix match instead of slicing mid
/// character.
fn strip_prefix_ignore_ascii_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

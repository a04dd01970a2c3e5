//! Job posting link normalisation.

/// Scheme assumed for links entered without one.
const DEFAULT_SCHEME: &str = "https://";

/// Normalise a user-entered job posting link.
///
/// - Surrounding whitespace is trimmed.
/// - Empty input yields `None`.
/// - Input without a `scheme://` prefix gets `https://` prepended.
///
/// # Examples
///
/// ```
/// use jobtrack_core::links::normalize_link;
/// assert_eq!(normalize_link("example.com/jobs/1").as_deref(), Some("https://example.com/jobs/1"));
/// assert_eq!(normalize_link("http://example.com").as_deref(), Some("http://example.com"));
/// assert_eq!(normalize_link("  "), None);
/// ```
pub fn normalize_link(raw: &str) -> Option<String> {
    let link = raw.trim();
    if link.is_empty() {
        return None;
    }
    if has_scheme(link) {
        Some(link.to_string())
    } else {
        Some(format!("{DEFAULT_SCHEME}{link}"))
    }
}

/// `true` if `link` starts with an RFC 3986 scheme followed by `://`.
fn has_scheme(link: &str) -> bool {
    let Some((scheme, _)) = link.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

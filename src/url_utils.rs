//! URL helpers: absolute-URL checks and relative resolution.
//!
//! Every URL stored in a record must be absolute; resolution against the
//! site base happens exactly once, at extraction time, through these
//! helpers.

use url::Url;

/// Check whether a string is already an absolute http(s) URL with a host.
#[must_use]
pub fn is_absolute_url(s: &str) -> bool {
    let s = s.trim();
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return false;
    }
    Url::parse(s).is_ok_and(|url| url.host().is_some())
}

/// Resolve a possibly-relative URL against the site base.
///
/// Already-absolute URLs pass through unchanged; unresolvable inputs are
/// returned as-is rather than dropped, so the caller sees what the markup
/// contained.
#[must_use]
pub fn resolve(base: &Url, href: &str) -> String {
    let href = href.trim();
    if href.is_empty() {
        return String::new();
    }
    if is_absolute_url(href) {
        return href.to_string();
    }
    match base.join(href) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => href.to_string(),
    }
}

/// Resolve and parse in one step; `None` when the result is not a valid
/// absolute URL.
#[must_use]
pub fn resolve_parsed(base: &Url, href: &str) -> Option<Url> {
    let resolved = resolve(base, href);
    if is_absolute_url(&resolved) {
        Url::parse(&resolved).ok()
    } else {
        None
    }
}

//! Charset detection and transcoding for fetched pages.
//!
//! The target site predates UTF-8 ubiquity; pages may declare ISO-8859-1 or
//! windows-125x charsets in meta tags. Decoding is lossy: invalid bytes
//! become the Unicode replacement character rather than errors.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Matches both `<meta charset="...">` and the legacy
/// `<meta http-equiv="Content-Type" content="...; charset=...">` forms.
#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]*charset\s*=\s*["']?([a-z0-9_.:-]+)"#).expect("valid regex")
});

/// Detect the declared encoding from the head of an HTML byte stream,
/// defaulting to UTF-8. Only the first 1024 bytes are examined.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);

    META_CHARSET
        .captures(&head_str)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode HTML bytes to a UTF-8 string using the declared charset.
#[must_use]
pub fn decode_html(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

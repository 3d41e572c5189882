//! Character encoding detection for the bytes entry point.
//!
//! Chat pages are almost always UTF-8, but saved/exported documents show up
//! in legacy encodings often enough to matter. The charset is sniffed from
//! meta tags in the document head and the bytes decoded to UTF-8, replacing
//! invalid sequences with � rather than failing.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

#[allow(clippy::expect_used)]
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>;]+)"#).expect("META_CHARSET regex")
});

/// Sniffs the declared encoding from the first 1024 bytes.
///
/// Covers both `<meta charset="...">` and the `http-equiv` Content-Type
/// form (the pattern matches `charset=` wherever it appears inside a meta
/// tag). Defaults to UTF-8, the web default, when nothing is declared.
#[must_use]
pub fn sniff_charset(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(1024)];
    let head_str = String::from_utf8_lossy(head);
    META_CHARSET
        .captures(&head_str)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decodes HTML bytes to a UTF-8 string using the sniffed charset.
///
/// Invalid characters become the Unicode replacement character; this never
/// fails.
///
/// ```
/// use convoscrape::encoding::to_utf8;
///
/// let html = b"<html><head><meta charset=\"ISO-8859-1\"></head><body>Caf\xE9</body></html>";
/// assert!(to_utf8(html).contains("Caf\u{e9}"));
/// ```
#[must_use]
pub fn to_utf8(html: &[u8]) -> String {
    let encoding = sniff_charset(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}

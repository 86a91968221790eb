//! Minimal XML escaping for SpreadsheetML text content.

use std::borrow::Cow;

fn needs_escape(byte: u8) -> bool {
    matches!(byte, b'&' | b'<' | b'>' | b'"' | b'\'')
}

/// Escape the five XML special characters in `text`.
///
/// Strings without special characters are returned borrowed. The ampersand
/// arm comes first so already-produced entities are never escaped twice.
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.bytes().any(needs_escape) {
        return Cow::Borrowed(text);
    }

    let mut escaped = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_all_five() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape("\"x\""), "&quot;x&quot;");
        assert_eq!(escape("it's"), "it&apos;s");
    }

    #[test]
    fn test_no_double_escaping() {
        assert_eq!(escape("&amp;"), "&amp;amp;");
    }

    #[test]
    fn test_clean_string_borrows() {
        assert!(matches!(escape("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_unicode_passthrough() {
        assert_eq!(escape("Ñoño 😀 <tag>"), "Ñoño 😀 &lt;tag&gt;");
    }
}

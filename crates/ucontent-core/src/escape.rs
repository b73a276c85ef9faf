//! Escaping and attribute-name primitives.
//!
//! Escaping is delegated to the [`html_escape`] crate. Every interpolated string
//! goes through the quoted-attribute encoder, which covers `& < > " '`, so the same
//! function is safe for text nodes and for both quoting styles of attribute values.

use std::borrow::Cow;

/// HTML-escape `& < > " '`.
pub fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Convert a camelCase key into a kebab-case attribute suffix.
///
/// A hyphen is inserted before an uppercase letter that follows a lowercase
/// letter or digit, and before the last capital of an acronym run that is
/// followed by a lowercase letter (`XMLHttp` becomes `xml-http`).
pub fn hyphenize(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push('-');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup_characters() {
        let out = escape(r#"<a href="x">Tom & 'Jerry'</a>"#);
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(!out.contains('"'));
        assert!(!out.contains('\''));
        assert!(out.contains("&amp;"));
        assert!(out.starts_with("&lt;a"));
    }

    #[test]
    fn test_escape_plain_text_is_borrowed() {
        assert!(matches!(escape("plain text"), Cow::Borrowed("plain text")));
    }

    #[test]
    fn test_hyphenize_camel_case() {
        assert_eq!(hyphenize("userId"), "user-id");
        assert_eq!(hyphenize("labelledBy"), "labelled-by");
        assert_eq!(hyphenize("plain"), "plain");
    }

    #[test]
    fn test_hyphenize_acronyms_and_digits() {
        assert_eq!(hyphenize("XMLHttpRequest"), "xml-http-request");
        assert_eq!(hyphenize("h2Title"), "h2-title");
        assert_eq!(hyphenize("Leading"), "leading");
    }
}

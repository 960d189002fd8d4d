//! Escaping for HTML, XML and inline JSON.

use std::borrow::Cow;

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters for text and attribute positions.
///
/// Uses `Cow` to avoid allocation when no escaping is needed. The output is
/// also valid XML character data, so sitemaps use it too.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(ESCAPE_CHARS) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Make JSON text safe to embed in a `<script>` element.
///
/// Every `</script` (any ASCII case) becomes `<\/script`, which is the same
/// string to a JSON parser but no longer closes the element.
pub fn escape_script_json(json: &str) -> Cow<'_, str> {
    const CLOSE: &str = "</script";

    let lower = json.to_ascii_lowercase();
    if !lower.contains(CLOSE) {
        return Cow::Borrowed(json);
    }

    // ASCII lowercasing keeps byte offsets aligned with the original.
    let mut result = String::with_capacity(json.len() + 8);
    let mut last = 0;
    for (idx, _) in lower.match_indices(CLOSE) {
        result.push_str(&json[last..idx]);
        result.push_str("<\\/");
        last = idx + 2;
    }
    result.push_str(&json[last..]);
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape("hello world"), "hello world");
        assert!(matches!(escape("hello"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_mixed() {
        assert_eq!(
            escape("<a href=\"#\">link & text</a>"),
            "&lt;a href=&quot;#&quot;&gt;link &amp; text&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_does_not_double_escape_order() {
        // `&` must not be re-escaped after entities are produced
        assert_eq!(escape("<&>"), "&lt;&amp;&gt;");
    }

    #[test]
    fn test_escape_empty() {
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_script_json_untouched() {
        let json = r#"{"name":"a/b <i>"}"#;
        assert!(matches!(escape_script_json(json), Cow::Borrowed(_)));
    }

    #[test]
    fn test_script_json_close_tag() {
        assert_eq!(
            escape_script_json(r#"{"name":"</script><b>"}"#),
            r#"{"name":"<\/script><b>"}"#
        );
    }

    #[test]
    fn test_script_json_close_tag_any_case() {
        assert_eq!(
            escape_script_json("</SCRIPT> and </Script"),
            "<\\/SCRIPT> and <\\/Script"
        );
    }

    #[test]
    fn test_script_json_multibyte_offsets() {
        assert_eq!(escape_script_json("é</script>ü"), "é<\\/script>ü");
    }
}

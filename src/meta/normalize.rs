//! Raw input → canonical record.
//!
//! Normalization never fails. Unparseable URLs are kept as typed, missing
//! fields become empty strings, and an empty language falls back to `en`.

use super::{Field, MetaRecord, RawMeta};

/// Language used when none is given.
pub const DEFAULT_LANG: &str = "en";

/// Build a canonical record from raw input.
pub fn normalize(raw: &RawMeta) -> MetaRecord {
    MetaRecord {
        title: normalize_text(raw.get(Field::Title)),
        description: normalize_text(raw.get(Field::Description)),
        canonical: normalize_url(raw.get(Field::Canonical)).value,
        site_name: normalize_text(raw.get(Field::SiteName)),
        og_image: normalize_url(raw.get(Field::OgImage)).value,
        twitter: normalize_twitter(raw.get(Field::Twitter)),
        theme_color: normalize_text(raw.get(Field::ThemeColor)),
        lang: normalize_lang(raw.get(Field::Lang)),
    }
}

/// Trim a text field; absent becomes empty.
#[inline]
pub fn normalize_text(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_string()
}

/// Result of URL normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    /// Serialized URL, or the trimmed input when it did not parse.
    pub value: String,
    /// Whether the input parsed as an absolute URL.
    pub recognized: bool,
}

/// Parse and re-serialize an absolute URL.
///
/// `example.com/page` has no scheme, so it is not recognized and comes back
/// unchanged. Empty input gives an empty, unrecognized value.
pub fn normalize_url(value: Option<&str>) -> NormalizedUrl {
    let raw = value.unwrap_or_default().trim();
    if raw.is_empty() {
        return NormalizedUrl {
            value: String::new(),
            recognized: false,
        };
    }

    match url::Url::parse(raw) {
        Ok(parsed) => NormalizedUrl {
            value: parsed.into(),
            recognized: true,
        },
        Err(_) => NormalizedUrl {
            value: raw.to_string(),
            recognized: false,
        },
    }
}

/// Trim a Twitter handle and make sure it starts with `@`.
pub fn normalize_twitter(value: Option<&str>) -> String {
    let handle = value.unwrap_or_default().trim();
    match handle {
        "" => String::new(),
        h if h.starts_with('@') => h.to_string(),
        h => format!("@{h}"),
    }
}

/// Trim a language tag, falling back to [`DEFAULT_LANG`].
pub fn normalize_lang(value: Option<&str>) -> String {
    match value.unwrap_or_default().trim() {
        "" => DEFAULT_LANG.to_string(),
        lang => lang.to_string(),
    }
}

//! Built-in example metadata.

use super::{Field, MetaRecord, RawMeta, normalize};

const EXAMPLE: [(Field, &str); 8] = [
    (
        Field::Title,
        "GitHub SEO Meta Generator - generate meta tags fast",
    ),
    (
        Field::Description,
        "Generate SEO-friendly meta tags (Open Graph, Twitter cards, JSON-LD) for GitHub Pages and copy them in one click.",
    ),
    (Field::Canonical, "https://username.github.io/repo/"),
    (Field::SiteName, "username.github.io"),
    (Field::OgImage, "https://username.github.io/repo/og.png"),
    (Field::Twitter, "@yourhandle"),
    (Field::ThemeColor, "#0b1020"),
    (Field::Lang, "en"),
];

/// Example input, as raw fields.
pub fn example_raw() -> RawMeta {
    let mut raw = RawMeta::default();
    for (field, value) in EXAMPLE {
        raw.set(field, value);
    }
    raw
}

/// Example input, normalized.
pub fn example() -> MetaRecord {
    normalize(&example_raw())
}

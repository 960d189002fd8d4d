//! Page metadata: raw input and the canonical record.
//!
//! ```text
//! RawMeta (optional strings, any source)
//!    │  normalize()
//!    ▼
//! MetaRecord (all eight fields present, trimmed, lang defaulted)
//! ```
//!
//! Raw input can be layered with [`RawMeta::overlay`]: example data, a TOML
//! file, a share link and command-line flags all produce a `RawMeta`, and the
//! highest layer that sets a field wins.

mod example;
mod normalize;
mod warning;

pub use example::{example, example_raw};
pub use normalize::{
    NormalizedUrl, normalize, normalize_lang, normalize_text, normalize_twitter, normalize_url,
};
pub use warning::{DESCRIPTION_MAX_CHARS, TITLE_MAX_CHARS, length_warnings};

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

// ============================================================================
// Field
// ============================================================================

/// One of the eight metadata fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Description,
    Canonical,
    SiteName,
    OgImage,
    Twitter,
    ThemeColor,
    Lang,
}

impl Field {
    /// All fields, in record order.
    pub const ALL: [Field; 8] = [
        Field::Title,
        Field::Description,
        Field::Canonical,
        Field::SiteName,
        Field::OgImage,
        Field::Twitter,
        Field::ThemeColor,
        Field::Lang,
    ];

    /// Key used in share payloads and config files (camelCase).
    pub const fn key(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Description => "description",
            Field::Canonical => "canonical",
            Field::SiteName => "siteName",
            Field::OgImage => "ogImage",
            Field::Twitter => "twitter",
            Field::ThemeColor => "themeColor",
            Field::Lang => "lang",
        }
    }
}

// ============================================================================
// RawMeta
// ============================================================================

/// Unvalidated field values as collected from an input source.
///
/// `None` means the source did not provide the field at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub canonical: Option<String>,
    pub site_name: Option<String>,
    pub og_image: Option<String>,
    pub twitter: Option<String>,
    pub theme_color: Option<String>,
    pub lang: Option<String>,
}

impl RawMeta {
    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Canonical => &self.canonical,
            Field::SiteName => &self.site_name,
            Field::OgImage => &self.og_image,
            Field::Twitter => &self.twitter,
            Field::ThemeColor => &self.theme_color,
            Field::Lang => &self.lang,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Canonical => &mut self.canonical,
            Field::SiteName => &mut self.site_name,
            Field::OgImage => &mut self.og_image,
            Field::Twitter => &mut self.twitter,
            Field::ThemeColor => &mut self.theme_color,
            Field::Lang => &mut self.lang,
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// Layer `top` over `self`: fields present in `top` replace ours.
    pub fn overlay(mut self, top: RawMeta) -> Self {
        for field in Field::ALL {
            if let Some(value) = top.slot(field) {
                *self.slot_mut(field) = Some(value.clone());
            }
        }
        self
    }

    /// Extract fields from an untrusted JSON object.
    ///
    /// Only JSON strings are accepted. Anything else (numbers, null, nested
    /// objects) is treated as if the field were absent.
    pub fn from_json(value: &JsonValue) -> Self {
        let mut raw = Self::default();
        let Some(object) = value.as_object() else {
            return raw;
        };
        for field in Field::ALL {
            if let Some(JsonValue::String(s)) = object.get(field.key()) {
                raw.set(field, s.clone());
            }
        }
        raw
    }
}

impl From<&MetaRecord> for RawMeta {
    fn from(record: &MetaRecord) -> Self {
        let mut raw = Self::default();
        for field in Field::ALL {
            raw.set(field, record.get(field));
        }
        raw
    }
}

// ============================================================================
// MetaRecord
// ============================================================================

/// Canonical page metadata.
///
/// Invariants (upheld by [`normalize`]):
/// - every field is present, possibly empty
/// - `lang` is never empty
/// - a non-empty `twitter` starts with `@`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaRecord {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub site_name: String,
    pub og_image: String,
    pub twitter: String,
    pub theme_color: String,
    pub lang: String,
}

impl MetaRecord {
    /// The record produced from no input at all.
    pub fn empty() -> Self {
        normalize(&RawMeta::default())
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
            Field::Canonical => &self.canonical,
            Field::SiteName => &self.site_name,
            Field::OgImage => &self.og_image,
            Field::Twitter => &self.twitter,
            Field::ThemeColor => &self.theme_color,
            Field::Lang => &self.lang,
        }
    }

    /// JSON object with camelCase keys in record order.
    pub fn to_json(&self) -> JsonValue {
        let map: Map<String, JsonValue> = Field::ALL
            .iter()
            .map(|&field| (field.key().to_string(), self.get(field).into()))
            .collect();
        JsonValue::Object(map)
    }
}

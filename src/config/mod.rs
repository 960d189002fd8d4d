//! Metadata input file (`meta.toml`).
//!
//! A flat TOML table whose keys are the record fields. Keys may be written in
//! camelCase (as in share payloads) or snake_case:
//!
//! ```toml
//! title = "My page"
//! description = "What it is about"
//! canonical = "https://me.github.io/project/"
//! site_name = "me.github.io"
//! ogImage = "https://me.github.io/project/og.png"
//! twitter = "me"
//! theme_color = "#0b1020"
//! lang = "en"
//! ```
//!
//! Non-string scalars are accepted and turned into text (`lang = 1` reads as
//! `"1"`). Arrays and tables are ignored. Unknown keys are reported and
//! ignored.

mod error;
mod util;

pub use error::ConfigError;
pub use util::{coerce_scalar, expand_path};

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::meta::{Field, RawMeta};
use crate::{debug, log};

/// On-disk shape of the metadata file.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct MetaFile {
    title: Option<toml::Value>,
    description: Option<toml::Value>,
    canonical: Option<toml::Value>,
    #[serde(alias = "site_name")]
    site_name: Option<toml::Value>,
    #[serde(alias = "og_image")]
    og_image: Option<toml::Value>,
    twitter: Option<toml::Value>,
    #[serde(alias = "theme_color")]
    theme_color: Option<toml::Value>,
    lang: Option<toml::Value>,
}

impl MetaFile {
    fn into_raw(self) -> RawMeta {
        let values = [
            (Field::Title, self.title),
            (Field::Description, self.description),
            (Field::Canonical, self.canonical),
            (Field::SiteName, self.site_name),
            (Field::OgImage, self.og_image),
            (Field::Twitter, self.twitter),
            (Field::ThemeColor, self.theme_color),
            (Field::Lang, self.lang),
        ];

        let mut raw = RawMeta::default();
        for (field, value) in values {
            let Some(value) = value else { continue };
            match coerce_scalar(value) {
                Some(text) => raw.set(field, text),
                None => debug!("config"; "ignoring non-scalar value for `{}`", field.key()),
            }
        }
        raw
    }
}

/// Load raw metadata from a TOML file.
///
/// Unknown keys are reported as a warning and skipped.
pub fn load_meta_file(path: &Path) -> Result<RawMeta, ConfigError> {
    let content =
        fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

    let (raw, ignored) = parse_with_ignored(&content)?;
    if !ignored.is_empty() {
        print_unknown_fields_warning(&ignored, path);
    }

    debug!("config"; "loaded {}", path.display());
    Ok(raw)
}

/// Parse TOML content, collecting any unknown keys.
pub fn parse_with_ignored(content: &str) -> Result<(RawMeta, Vec<String>), ConfigError> {
    let mut ignored = Vec::new();
    let deserializer = toml::Deserializer::new(content);
    let file: MetaFile = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
        ignored.push(path.to_string());
    })?;
    Ok((file.into_raw(), ignored))
}

/// Print warning about unknown fields.
fn print_unknown_fields_warning(fields: &[String], path: &Path) {
    let display_path = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    log!("warning"; "unknown fields in {}, ignoring:", display_path);
    for field in fields {
        eprintln!("- {}", field);
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_and_snake_case() {
        let content = r##"
title = "T"
siteName = "camel"
og_image = "https://a.com/og.png"
theme_color = "#fff"
"##;
        let (raw, ignored) = parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty(), "{ignored:?}");
        assert_eq!(raw.get(Field::Title), Some("T"));
        assert_eq!(raw.get(Field::SiteName), Some("camel"));
        assert_eq!(raw.get(Field::OgImage), Some("https://a.com/og.png"));
        assert_eq!(raw.get(Field::ThemeColor), Some("#fff"));
        assert_eq!(raw.get(Field::Canonical), None);
    }

    #[test]
    fn test_parse_coerces_scalars() {
        let content = "title = 2024\ndescription = true\nlang = 1.5";
        let (raw, _) = parse_with_ignored(content).unwrap();
        assert_eq!(raw.get(Field::Title), Some("2024"));
        assert_eq!(raw.get(Field::Description), Some("true"));
        assert_eq!(raw.get(Field::Lang), Some("1.5"));
    }

    #[test]
    fn test_parse_drops_compound_values() {
        let content = "title = [\"a\", \"b\"]\n[twitter]\nhandle = \"x\"";
        let (raw, _) = parse_with_ignored(content).unwrap();
        assert_eq!(raw.get(Field::Title), None);
        assert_eq!(raw.get(Field::Twitter), None);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "title = \"T\"\nkeywords = \"a, b\"";
        let (raw, ignored) = parse_with_ignored(content).unwrap();
        assert_eq!(raw.get(Field::Title), Some("T"));
        assert_eq!(ignored, vec!["keywords".to_string()]);
    }

    #[test]
    fn test_invalid_toml() {
        let result = parse_with_ignored("title = \"unclosed");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_load_meta_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("meta.toml");
        fs::write(&path, "title = \"From file\"\nlang = \"de\"").unwrap();

        let raw = load_meta_file(&path).unwrap();
        assert_eq!(raw.get(Field::Title), Some("From file"));
        assert_eq!(raw.get(Field::Lang), Some("de"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(load_meta_file(&path), Err(ConfigError::Io(..))));
    }
}

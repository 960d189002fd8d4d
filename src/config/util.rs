//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the home directory.
///
/// Paths that are not valid UTF-8 are returned unchanged.
pub fn expand_path(path: &Path) -> PathBuf {
    match path.to_str() {
        Some(s) => PathBuf::from(shellexpand::tilde(s).into_owned()),
        None => path.to_path_buf(),
    }
}

/// Render a TOML scalar as text. Arrays and tables have no text form.
pub fn coerce_scalar(value: toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        toml::Value::Boolean(b) => Some(b.to_string()),
        toml::Value::Datetime(d) => Some(d.to_string()),
        toml::Value::Array(_) | toml::Value::Table(_) => None,
    }
}

// ============================================================================
// tests
// ============================================================================

//! Artifact rendering.
//!
//! Pure functions from a [`MetaRecord`] to text:
//!
//! - **Head**: `<head>` snippet with meta, Open Graph, Twitter Card, JSON-LD
//! - **Robots**: `robots.txt`
//! - **Sitemap**: `sitemap.xml`
//! - **Document**: standalone HTML page embedding the head snippet
//!
//! Rendering never fails. An all-empty record still yields well-formed output.

pub mod document;
pub mod escape;
pub mod head;
pub mod robots;
pub mod sitemap;

pub use document::html_document;
pub use head::{HeadSnippet, head_snippet};
pub use robots::robots_txt;
pub use sitemap::sitemap_xml;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::log;
use crate::meta::MetaRecord;

/// Output file names used by [`Artifacts::write_to`].
pub const HEAD_FILE: &str = "head.html";
pub const ROBOTS_FILE: &str = "robots.txt";
pub const SITEMAP_FILE: &str = "sitemap.xml";
pub const DOCUMENT_FILE: &str = "template.html";

/// All rendered outputs for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifacts {
    pub head: String,
    pub robots: String,
    pub sitemap: String,
    pub document: String,
}

impl Artifacts {
    pub fn render(record: &MetaRecord) -> Self {
        Self {
            head: head_snippet(record),
            robots: robots_txt(record),
            sitemap: sitemap_xml(record),
            document: html_document(record),
        }
    }

    /// Write every artifact into `dir`, creating it if needed.
    ///
    /// Returns the written paths in a stable order.
    pub fn write_to(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

        // Head snippet gets a trailing newline as a file
        let head = format!("{}\n", self.head);
        let files = [
            (HEAD_FILE, head.as_str()),
            (ROBOTS_FILE, self.robots.as_str()),
            (SITEMAP_FILE, self.sitemap.as_str()),
            (DOCUMENT_FILE, self.document.as_str()),
        ];

        let mut written = Vec::with_capacity(files.len());
        for (name, content) in files {
            let path = dir.join(name);
            fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log!("write"; "{}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

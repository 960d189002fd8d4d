//! robots.txt generation.

use super::sitemap::with_trailing_slash;
use crate::meta::MetaRecord;

const ALLOW_ALL: &str = "User-agent: *\nAllow: /\n";

/// Allow-all robots.txt, pointing at `sitemap.xml` next to the canonical URL.
pub fn robots_txt(record: &MetaRecord) -> String {
    if record.canonical.is_empty() {
        return ALLOW_ALL.to_string();
    }

    let base = with_trailing_slash(&record.canonical);
    format!("{ALLOW_ALL}\nSitemap: {base}sitemap.xml\n")
}

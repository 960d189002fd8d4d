//! Sitemap generation.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/</loc>
//!   </url>
//! </urlset>
//! ```

use super::escape::escape;
use crate::meta::MetaRecord;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// `<loc>` used when there is no canonical URL.
pub const FALLBACK_LOC: &str = "https://example.com/";

/// Single-page sitemap for the canonical URL.
pub fn sitemap_xml(record: &MetaRecord) -> String {
    Sitemap::for_record(record).into_xml()
}

/// Replace one trailing `/` with `/`, or append one.
///
/// Only the last character is considered, so `a//` stays `a//`.
pub fn with_trailing_slash(url: &str) -> String {
    let base = url.strip_suffix('/').unwrap_or(url);
    format!("{base}/")
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
}

impl Sitemap {
    fn for_record(record: &MetaRecord) -> Self {
        let loc = if record.canonical.is_empty() {
            FALLBACK_LOC.to_string()
        } else {
            with_trailing_slash(&record.canonical)
        };
        Self {
            urls: vec![UrlEntry { loc }],
        }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape(&entry.loc));
            xml.push_str("</loc>\n");
            xml.push_str("  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::Reader;
    use quick_xml::events::Event;

    fn with_canonical(canonical: &str) -> MetaRecord {
        let mut record = MetaRecord::empty();
        record.canonical = canonical.into();
        record
    }

    /// Parse the document and return how many `<loc>` elements it has.
    fn count_locs(xml: &str) -> usize {
        let mut reader = Reader::from_str(xml);
        let mut locs = 0;
        loop {
            match reader.read_event().expect("well-formed xml") {
                Event::Start(e) if e.name().as_ref() == b"loc" => locs += 1,
                Event::Eof => break,
                _ => {}
            }
        }
        locs
    }

    #[test]
    fn test_trailing_slash() {
        assert_eq!(with_trailing_slash("https://a.com/x"), "https://a.com/x/");
        assert_eq!(with_trailing_slash("https://a.com/x/"), "https://a.com/x/");
        assert_eq!(with_trailing_slash("a//"), "a//");
        assert_eq!(with_trailing_slash(""), "/");
    }

    #[test]
    fn test_sitemap_empty_record() {
        let xml = sitemap_xml(&MetaRecord::empty());
        assert_eq!(
            xml,
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n  \
             <url>\n    <loc>https://example.com/</loc>\n  </url>\n\
             </urlset>\n"
        );
    }

    #[test]
    fn test_sitemap_normalizes_slash() {
        let xml = sitemap_xml(&with_canonical("https://a.com/x"));
        assert!(xml.contains("<loc>https://a.com/x/</loc>"));
    }

    #[test]
    fn test_sitemap_escapes_special_chars() {
        let xml = sitemap_xml(&with_canonical("https://example.com/search?q=a&b=c"));
        assert!(xml.contains("<loc>https://example.com/search?q=a&amp;b=c/</loc>"));
    }

    #[test]
    fn test_sitemap_well_formed() {
        for canonical in ["", "https://a.com/", "https://a.com/?q=<x>&y='1'"] {
            let xml = sitemap_xml(&with_canonical(canonical));
            assert_eq!(count_locs(&xml), 1, "{xml}");
        }
    }

    #[test]
    fn test_sitemap_xml_structure() {
        let xml = sitemap_xml(&with_canonical("https://a.com/"));
        let lines: Vec<&str> = xml.lines().collect();
        assert_eq!(lines[0], r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        assert!(lines[1].starts_with("<urlset"));
        assert_eq!(lines.last().map(|l| l.trim()), Some("</urlset>"));
        assert!(xml.ends_with('\n'));
    }
}

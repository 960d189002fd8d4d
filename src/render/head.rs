//! `<head>` snippet: basic meta, Open Graph, Twitter Card and JSON-LD.
//!
//! Lines are emitted in a fixed order. Optional tags are skipped when their
//! field is empty, while `description`-style tags are always emitted (with
//! empty content if needed).

use std::fmt;

use serde_json::{Value as JsonValue, json};

use super::escape::{escape, escape_script_json};
use crate::meta::MetaRecord;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Ordered lines of head markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadSnippet {
    lines: Vec<String>,
}

impl HeadSnippet {
    pub fn build(record: &MetaRecord) -> Self {
        let mut head = Self { lines: Vec::with_capacity(20) };
        head.push_basic(record);
        head.push_open_graph(record);
        head.push_twitter(record);
        head.lines.push(json_ld_script(record));
        head
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    fn push_basic(&mut self, r: &MetaRecord) {
        self.lines.push(format!("<title>{}</title>", escape(&r.title)));
        self.meta_name("description", &r.description);
        if !r.canonical.is_empty() {
            self.lines.push(format!(
                r#"<link rel="canonical" href="{}" />"#,
                escape(&r.canonical)
            ));
        }
        if !r.theme_color.is_empty() {
            self.meta_name("theme-color", &r.theme_color);
        }
    }

    fn push_open_graph(&mut self, r: &MetaRecord) {
        self.meta_property("og:title", &r.title);
        self.meta_property("og:description", &r.description);
        if !r.canonical.is_empty() {
            self.meta_property("og:url", &r.canonical);
        }
        if !r.site_name.is_empty() {
            self.meta_property("og:site_name", &r.site_name);
        }
        self.meta_property("og:type", "website");
        if !r.og_image.is_empty() {
            self.meta_property("og:image", &r.og_image);
        }
    }

    fn push_twitter(&mut self, r: &MetaRecord) {
        self.meta_name("twitter:card", twitter_card(r));
        if !r.twitter.is_empty() {
            self.meta_name("twitter:site", &r.twitter);
        }
        self.meta_name("twitter:title", &r.title);
        self.meta_name("twitter:description", &r.description);
        if !r.og_image.is_empty() {
            self.meta_name("twitter:image", &r.og_image);
        }
    }

    fn meta_name(&mut self, name: &str, content: &str) {
        self.lines.push(format!(
            r#"<meta name="{name}" content="{}" />"#,
            escape(content)
        ));
    }

    fn meta_property(&mut self, property: &str, content: &str) {
        self.lines.push(format!(
            r#"<meta property="{property}" content="{}" />"#,
            escape(content)
        ));
    }
}

impl fmt::Display for HeadSnippet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Render the head snippet as a single string.
pub fn head_snippet(record: &MetaRecord) -> String {
    HeadSnippet::build(record).to_string()
}

/// `summary_large_image` when there is an image to show.
pub fn twitter_card(record: &MetaRecord) -> &'static str {
    if record.og_image.is_empty() {
        "summary"
    } else {
        "summary_large_image"
    }
}

/// Schema.org graph with a `WebSite` and a `WebPage` node.
///
/// `url` keys are left out entirely when there is no canonical URL.
pub fn json_ld(record: &MetaRecord) -> JsonValue {
    let url = (!record.canonical.is_empty()).then_some(record.canonical.as_str());
    let site_name = if record.site_name.is_empty() {
        &record.title
    } else {
        &record.site_name
    };

    let mut website = json!({ "@type": "WebSite", "name": site_name });
    if let Some(url) = url {
        website["url"] = url.into();
    }

    let mut webpage = json!({
        "@type": "WebPage",
        "name": record.title,
        "description": record.description,
    });
    if let Some(url) = url {
        webpage["url"] = url.into();
    }
    webpage["inLanguage"] = record.lang.as_str().into();

    json!({ "@context": SCHEMA_CONTEXT, "@graph": [website, webpage] })
}

fn json_ld_script(record: &MetaRecord) -> String {
    let json = json_ld(record).to_string();
    format!(
        r#"<script type="application/ld+json">{}</script>"#,
        escape_script_json(&json)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::example;

    fn empty() -> MetaRecord {
        MetaRecord::empty()
    }

    #[test]
    fn test_empty_record_lines() {
        let head = HeadSnippet::build(&empty());
        assert_eq!(
            head.lines(),
            [
                "<title></title>",
                r#"<meta name="description" content="" />"#,
                r#"<meta property="og:title" content="" />"#,
                r#"<meta property="og:description" content="" />"#,
                r#"<meta property="og:type" content="website" />"#,
                r#"<meta name="twitter:card" content="summary" />"#,
                r#"<meta name="twitter:title" content="" />"#,
                r#"<meta name="twitter:description" content="" />"#,
                r#"<script type="application/ld+json">{"@context":"https://schema.org","@graph":[{"@type":"WebSite","name":""},{"@type":"WebPage","name":"","description":"","inLanguage":"en"}]}</script>"#,
            ]
        );
    }

    #[test]
    fn test_full_record_order() {
        let head = head_snippet(&example());
        let expected = [
            "<title>",
            r#"name="description""#,
            r#"rel="canonical""#,
            r#"name="theme-color""#,
            r#"property="og:title""#,
            r#"property="og:description""#,
            r#"property="og:url""#,
            r#"property="og:site_name""#,
            r#"property="og:type""#,
            r#"property="og:image""#,
            r#"name="twitter:card""#,
            r#"name="twitter:site""#,
            r#"name="twitter:title""#,
            r#"name="twitter:description""#,
            r#"name="twitter:image""#,
            "application/ld+json",
        ];

        let lines: Vec<&str> = head.lines().collect();
        assert_eq!(lines.len(), expected.len());
        for (line, needle) in lines.iter().zip(expected) {
            assert!(line.contains(needle), "{line:?} should contain {needle:?}");
        }
        assert!(!head.ends_with('\n'));
    }

    #[test]
    fn test_title_escaped() {
        let mut record = empty();
        record.title = "<script>alert('x')</script>".into();
        let head = head_snippet(&record);

        assert!(head.contains("<title>&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;</title>"));
        assert!(head.contains(r#"content="&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;""#));
        // JSON-LD keeps the text but cannot close the script element
        assert!(head.contains(r#""name":"<script>alert('x')<\/script>""#));
        assert_eq!(head.matches("</script>").count(), 1);
    }

    #[test]
    fn test_attribute_quotes_escaped() {
        let mut record = empty();
        record.description = r#"He said "hi" & left"#.into();
        let head = head_snippet(&record);
        assert!(head.contains(r#"content="He said &quot;hi&quot; &amp; left""#));
    }

    #[test]
    fn test_twitter_card_selection() {
        let mut record = empty();
        assert_eq!(twitter_card(&record), "summary");
        assert!(!head_snippet(&record).contains("twitter:image"));

        record.og_image = "https://a.com/og.png".into();
        assert_eq!(twitter_card(&record), "summary_large_image");
        let head = head_snippet(&record);
        assert!(head.contains(r#"<meta name="twitter:card" content="summary_large_image" />"#));
        assert!(head.contains(r#"<meta name="twitter:image" content="https://a.com/og.png" />"#));
        assert!(head.contains(r#"<meta property="og:image" content="https://a.com/og.png" />"#));
    }

    #[test]
    fn test_twitter_site_only_with_handle() {
        let mut record = empty();
        assert!(!head_snippet(&record).contains("twitter:site"));
        record.twitter = "@me".into();
        assert!(head_snippet(&record).contains(r#"<meta name="twitter:site" content="@me" />"#));
    }

    #[test]
    fn test_json_ld_with_canonical() {
        let record = example();
        let json = json_ld(&record);

        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@graph"][0]["@type"], "WebSite");
        assert_eq!(json["@graph"][0]["name"], "username.github.io");
        assert_eq!(json["@graph"][0]["url"], "https://username.github.io/repo/");
        assert_eq!(json["@graph"][1]["@type"], "WebPage");
        assert_eq!(json["@graph"][1]["url"], "https://username.github.io/repo/");
        assert_eq!(json["@graph"][1]["inLanguage"], "en");
    }

    #[test]
    fn test_json_ld_key_order() {
        let mut record = empty();
        record.title = "T".into();
        record.canonical = "https://a.com/".into();
        assert_eq!(
            json_ld(&record).to_string(),
            r#"{"@context":"https://schema.org","@graph":[{"@type":"WebSite","name":"T","url":"https://a.com/"},{"@type":"WebPage","name":"T","description":"","url":"https://a.com/","inLanguage":"en"}]}"#
        );
    }

    #[test]
    fn test_json_ld_omits_empty_url() {
        let json = json_ld(&empty());
        assert!(json["@graph"][0].get("url").is_none());
        assert!(json["@graph"][1].get("url").is_none());
    }

    #[test]
    fn test_json_ld_site_name_falls_back_to_title() {
        let mut record = empty();
        record.title = "Page".into();
        assert_eq!(json_ld(&record)["@graph"][0]["name"], "Page");

        record.site_name = "Site".into();
        assert_eq!(json_ld(&record)["@graph"][0]["name"], "Site");
    }
}

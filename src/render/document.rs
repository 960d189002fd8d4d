//! Standalone HTML page for export.

use super::escape::escape;
use super::head::HeadSnippet;
use crate::embed::{DOCUMENT_HTML, DocumentVars};
use crate::meta::MetaRecord;

const HEAD_INDENT: &str = "    ";

/// Minimal valid document with the head snippet, a heading and a paragraph.
pub fn html_document(record: &MetaRecord) -> String {
    let head = HeadSnippet::build(record)
        .lines()
        .iter()
        .map(|line| format!("{HEAD_INDENT}{line}"))
        .collect::<Vec<_>>()
        .join("\n");

    DOCUMENT_HTML.render(&DocumentVars {
        lang: &escape(&record.lang),
        head: &head,
        title: &escape(&record.title),
        description: &escape(&record.description),
    })
}

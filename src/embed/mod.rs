//! Embedded templates.
//!
//! # Usage
//!
//! ```ignore
//! use embed::{DOCUMENT_HTML, DocumentVars};
//!
//! let html = DOCUMENT_HTML.render(&DocumentVars { lang: "en", head: "...", title: "...", description: "..." });
//! ```

mod template;

pub use template::{Template, TemplateVars, substitute};

/// Variables for document.html template.
///
/// Values are inserted verbatim; callers escape them first.
pub struct DocumentVars<'a> {
    pub lang: &'a str,
    /// Head snippet, already indented.
    pub head: &'a str,
    pub title: &'a str,
    pub description: &'a str,
}

impl TemplateVars for DocumentVars<'_> {
    fn apply(&self, content: &str) -> String {
        substitute(
            content,
            &[
                ("__LANG__", self.lang),
                ("__HEAD__", self.head),
                ("__TITLE__", self.title),
                ("__DESCRIPTION__", self.description),
            ],
        )
    }
}

/// Minimal standalone page wrapping a head snippet.
pub const DOCUMENT_HTML: Template<DocumentVars<'static>> =
    Template::new(include_str!("document.html"));

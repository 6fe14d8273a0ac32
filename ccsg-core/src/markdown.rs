//! Markdown rendering.

use pulldown_cmark::{html, Options, Parser};

/// Markdown renderer wrapping pulldown-cmark.
///
/// Pure transform: markup text in, HTML fragment out, no I/O. Malformed
/// input degrades to a near-literal rendering; it never fails.
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        // Baseline CommonMark only: headings, paragraphs, lists,
        // emphasis/strong, links. No dialect extensions.
        Self {
            options: Options::empty(),
        }
    }

    /// Convert markup text to an HTML fragment.
    pub fn render(&self, markup: &str) -> String {
        let parser = Parser::new_ext(markup, self.options);
        let mut out = String::new();
        html::push_html(&mut out, parser);
        out
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

//! Markdown-to-HTML rendering.
//!
//! The parser never renders markdown itself; every element, block and field
//! asks an [`HtmlRenderer`] for its HTML and derives plain text from that.

use std::sync::OnceLock;

use pulldown_cmark::{Options, Parser, html};
use regex::Regex;

/// Renders a markdown fragment to HTML.
pub trait HtmlRenderer {
    fn render(&self, markdown: &str) -> String;
}

/// Default renderer backed by pulldown-cmark.
#[derive(Debug, Clone, Copy)]
pub struct CmarkRenderer {
    options: Options,
}

impl CmarkRenderer {
    pub fn new(options: Options) -> Self {
        Self { options }
    }
}

impl Default for CmarkRenderer {
    fn default() -> Self {
        Self::new(Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH)
    }
}

impl HtmlRenderer for CmarkRenderer {
    fn render(&self, markdown: &str) -> String {
        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, Parser::new_ext(markdown, self.options));
        out
    }
}

impl<F> HtmlRenderer for F
where
    F: Fn(&str) -> String,
{
    fn render(&self, markdown: &str) -> String {
        self(markdown)
    }
}

fn tag_regex() -> &'static Regex {
    static TAG: OnceLock<Regex> = OnceLock::new();
    TAG.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag regex is valid"))
}

/// Plain text of an HTML fragment: tags stripped, entities decoded, trimmed.
pub fn plain_text(html: &str) -> String {
    let stripped = tag_regex().replace_all(html, "");
    html_escape::decode_html_entities(&stripped).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_heading() {
        let html = CmarkRenderer::default().render("# Title");
        assert_eq!(html, "<h1>Title</h1>\n");
    }

    #[test]
    fn closures_are_renderers() {
        let upper = |md: &str| md.to_uppercase();
        assert_eq!(upper.render("abc"), "ABC");
    }

    #[test]
    fn plain_text_strips_tags_and_decodes_entities() {
        assert_eq!(
            plain_text("<p>Fish &amp; <em>chips</em></p>\n"),
            "Fish & chips"
        );
    }

    #[test]
    fn plain_text_keeps_paragraph_breaks() {
        assert_eq!(plain_text("<p>a</p>\n<p>b</p>\n"), "a\nb");
    }
}

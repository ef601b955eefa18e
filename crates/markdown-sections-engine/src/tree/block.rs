use serde::Serialize;

use crate::parsing::rope::Span;

use super::element::Element;

/// A heading plus its own trailing content, with deeper headings as children.
///
/// An orphan block has no heading: it holds content that precedes the first
/// heading of its scope. Text, HTML and markdown cover only the block's own
/// span; the `*_with_children` accessors include descendants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    level: Option<u8>,
    children: Vec<Block>,
    elements: Vec<Element>,
    fields: Vec<String>,
    markdown: String,
    html: String,
    text: String,
    span: Span,
}

impl Block {
    pub(crate) fn new(
        level: Option<u8>,
        elements: Vec<Element>,
        fields: Vec<String>,
        markdown: String,
        html: String,
        text: String,
        span: Span,
    ) -> Self {
        Self {
            level,
            children: Vec::new(),
            elements,
            fields,
            markdown,
            html,
            text,
            span,
        }
    }

    pub(crate) fn push_child(&mut self, child: Block) {
        self.children.push(child);
    }

    /// Heading element, `None` for orphan blocks.
    pub fn heading(&self) -> Option<&Element> {
        self.level?;
        self.elements.first().filter(|e| e.is_heading())
    }

    pub fn level(&self) -> Option<u8> {
        self.level
    }

    pub fn is_orphan(&self) -> bool {
        self.level.is_none()
    }

    pub fn children(&self) -> &[Block] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Block> {
        self.children.get(index)
    }

    /// Elements of the block's own content, its heading first.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn element(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// Names of the field markers inside this block's own span.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn markdown(&self) -> &str {
        &self.markdown
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Body span from the first to the last of the block's own lines.
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn markdown_with_children(&self) -> String {
        self.gather(|b| b.markdown.as_str(), "\n\n")
    }

    pub fn html_with_children(&self) -> String {
        self.gather(|b| b.html.as_str(), "")
    }

    pub fn text_with_children(&self) -> String {
        self.gather(|b| b.text.as_str(), "\n")
    }

    fn gather<'a>(&'a self, part: fn(&'a Block) -> &'a str, sep: &str) -> String {
        let mut parts = Vec::new();
        self.walk(&mut |b| {
            let s = part(b);
            if !s.is_empty() {
                parts.push(s);
            }
        });
        parts.join(sep)
    }

    /// Pre-order walk over this block and its descendants.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Block)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }
}

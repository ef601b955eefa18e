use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    error::ParseError,
    options::ParseOptions,
    parsing::{self, header::HeaderSplit},
    render::{CmarkRenderer, HtmlRenderer},
};

use super::{
    collection::ContentScope, element::Element, field::Field, names::NameIndex, section::Section,
};

/// A parsed document: header, body and the section tree.
///
/// Produced once per parse call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    raw: String,
    header_raw: Option<String>,
    header: BTreeMap<String, String>,
    body: String,
    sections: Vec<Section>,
    #[serde(skip)]
    section_names: NameIndex,
}

impl Document {
    /// Parses with default options and the pulldown-cmark renderer.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Self::parse_with(text, &ParseOptions::default())
    }

    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Self, ParseError> {
        let renderer = CmarkRenderer::new(options.cmark_options());
        Self::parse_with_renderer(text, options, &renderer)
    }

    pub fn parse_with_renderer(
        text: &str,
        options: &ParseOptions,
        renderer: &dyn HtmlRenderer,
    ) -> Result<Self, ParseError> {
        parsing::parse_document(text, options, renderer)
    }

    /// Parses raw bytes, failing with [`ParseError::Input`] on invalid UTF-8.
    pub fn from_bytes(bytes: &[u8], options: &ParseOptions) -> Result<Self, ParseError> {
        let text = std::str::from_utf8(bytes)?;
        Self::parse_with(text, options)
    }

    pub(crate) fn new(raw: String, header: HeaderSplit, sections: Vec<Section>) -> Self {
        Self {
            section_names: NameIndex::from_names(sections.iter().map(|s| s.name())),
            raw,
            header_raw: header.raw,
            header: header.fields,
            body: header.body,
            sections,
        }
    }

    /// The full original text, header included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Text between the header delimiters, `None` when there is no header.
    pub fn header_raw(&self) -> Option<&str> {
        self.header_raw.as_deref()
    }

    pub fn header(&self) -> &BTreeMap<String, String> {
        &self.header
    }

    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.header.get(key).map(String::as_str)
    }

    /// Body with the header removed and surrounding blank lines trimmed.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section_at(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// First section with this name.
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.section_names
            .get(name)
            .and_then(|i| self.sections.get(i))
    }

    /// First field with this name in document order.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.sections.iter().find_map(|s| s.field(name))
    }
}

impl ContentScope for Document {
    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a Element>) {
        for section in &self.sections {
            section.collect_elements(out);
        }
    }
}

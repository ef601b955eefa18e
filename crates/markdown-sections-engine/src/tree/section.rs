use serde::Serialize;

use super::{
    block::Block, collection::ContentScope, element::Element, field::Field, names::NameIndex,
};

/// A top-level container, opened by `section` / `section:NAME` or implied by
/// content before the first section marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    name: Option<String>,
    index: usize,
    subsections: Vec<Subsection>,
    blocks: Vec<Block>,
    fields: Vec<Field>,
    #[serde(skip)]
    subsection_names: NameIndex,
    #[serde(skip)]
    field_names: NameIndex,
}

/// A container inside a section, opened by `sub:NAME`. Content of a section
/// that is under no explicit subsection lives in the unnamed default one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subsection {
    name: Option<String>,
    section: usize,
    blocks: Vec<Block>,
    fields: Vec<Field>,
    #[serde(skip)]
    field_names: NameIndex,
}

fn field_index(fields: &[Field]) -> NameIndex {
    NameIndex::from_names(fields.iter().map(|f| Some(f.name())))
}

impl Section {
    pub(crate) fn new(
        name: Option<String>,
        index: usize,
        subsections: Vec<Subsection>,
        blocks: Vec<Block>,
        fields: Vec<Field>,
    ) -> Self {
        Self {
            subsection_names: NameIndex::from_names(subsections.iter().map(|s| s.name())),
            field_names: field_index(&fields),
            name,
            index,
            subsections,
            blocks,
            fields,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Position among the document's sections.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn subsections(&self) -> &[Subsection] {
        &self.subsections
    }

    /// First subsection with this name.
    pub fn subsection(&self, name: &str) -> Option<&Subsection> {
        self.subsection_names
            .get(name)
            .and_then(|i| self.subsections.get(i))
    }

    pub fn default_subsection(&self) -> Option<&Subsection> {
        self.subsections.iter().find(|s| s.is_default())
    }

    /// Top-level blocks over the whole section, subsections included.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Every field marker of the section in document order, duplicates included.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// First field with this name anywhere in the section.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.field_names.get(name).and_then(|i| self.fields.get(i))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.field_names.names()
    }
}

impl Subsection {
    pub(crate) fn new(
        name: Option<String>,
        section: usize,
        blocks: Vec<Block>,
        fields: Vec<Field>,
    ) -> Self {
        Self {
            field_names: field_index(&fields),
            name,
            section,
            blocks,
            fields,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn is_default(&self) -> bool {
        self.name.is_none()
    }

    /// Index of the owning section.
    pub fn section_index(&self) -> usize {
        self.section
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// First field with this name inside the subsection.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.field_names.get(name).and_then(|i| self.fields.get(i))
    }
}

impl ContentScope for Section {
    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a Element>) {
        self.blocks.collect_elements(out);
    }
}

impl ContentScope for Subsection {
    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a Element>) {
        self.blocks.collect_elements(out);
    }
}

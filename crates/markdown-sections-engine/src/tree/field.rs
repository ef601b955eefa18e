use std::fmt;

use serde::Serialize;

use super::{block::Block, element::Element, element::ElementKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// `NAME`: captures what immediately follows, up to a blank line or marker.
    Regular,
    /// `NAME...`: captures a run until its closer or the end of the section.
    Extended,
}

/// Type inferred from what a field captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Heading,
    Image,
    Link,
    List,
    Text,
}

/// What a field captured: nothing, one element, one block, or a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "capture", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Empty,
    Element(Element),
    Block(Block),
    Sequence(Vec<FieldItem>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldItem {
    Element(Element),
    Block(Block),
}

impl FieldItem {
    pub fn markdown(&self) -> &str {
        match self {
            FieldItem::Element(e) => e.markdown(),
            FieldItem::Block(b) => b.markdown(),
        }
    }

    pub fn html(&self) -> &str {
        match self {
            FieldItem::Element(e) => e.html(),
            FieldItem::Block(b) => b.html(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            FieldItem::Element(e) => e.text(),
            FieldItem::Block(b) => b.text(),
        }
    }
}

/// A named capture over content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    name: String,
    kind: FieldKind,
    #[serde(rename = "type")]
    field_type: FieldType,
    value: FieldValue,
    markdown: String,
    html: String,
    text: String,
}

impl Field {
    pub(crate) fn new(
        name: String,
        kind: FieldKind,
        value: FieldValue,
        markdown: String,
        html: String,
        text: String,
    ) -> Self {
        Self {
            name,
            kind,
            field_type: FieldType::infer(&value),
            value,
            markdown,
            html,
            text,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn block(&self) -> Option<&Block> {
        match &self.value {
            FieldValue::Block(b) => Some(b),
            _ => None,
        }
    }

    pub fn element(&self) -> Option<&Element> {
        match &self.value {
            FieldValue::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Captured units in order, when the field is multi-valued.
    pub fn items(&self) -> &[FieldItem] {
        match &self.value {
            FieldValue::Sequence(items) => items,
            _ => &[],
        }
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
}

impl FieldType {
    pub fn infer(value: &FieldValue) -> Self {
        match value {
            FieldValue::Empty => FieldType::Text,
            FieldValue::Block(_) => FieldType::Heading,
            FieldValue::Element(e) => Self::of_element(e),
            FieldValue::Sequence(items) => match items.as_slice() {
                [FieldItem::Element(e)] => Self::of_element(e),
                [] => FieldType::Text,
                _ if items.iter().all(|i| matches!(i, FieldItem::Block(_))) => {
                    FieldType::Heading
                }
                _ => FieldType::Text,
            },
        }
    }

    fn of_element(element: &Element) -> Self {
        match element.kind() {
            ElementKind::Heading { .. } => FieldType::Heading,
            ElementKind::Image { .. } => FieldType::Image,
            ElementKind::Link { .. } => FieldType::Link,
            ElementKind::List { .. } => FieldType::List,
            ElementKind::Paragraph => FieldType::Text,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldKind::Regular => "regular",
            FieldKind::Extended => "extended",
        })
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FieldType::Heading => "heading",
            FieldType::Image => "image",
            FieldType::Link => "link",
            FieldType::List => "list",
            FieldType::Text => "text",
        })
    }
}

use serde::Serialize;

/// A typed content element pulled from a block's own content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    kind: ElementKind,
    markdown: String,
    html: String,
    text: String,
    /// Links and images inside a prose paragraph or a heading.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    inline: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    Heading { level: u8 },
    Paragraph,
    Image { src: String, alt: String },
    Link { text: String, href: String },
    List { ordered: bool, items: Vec<ListItem> },
}

impl ElementKind {
    pub fn label(&self) -> &'static str {
        match self {
            ElementKind::Heading { .. } => "heading",
            ElementKind::Paragraph => "paragraph",
            ElementKind::Image { .. } => "image",
            ElementKind::Link { .. } => "link",
            ElementKind::List { .. } => "list",
        }
    }
}

/// One entry of a list element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    /// Item markdown with the list marker removed.
    pub markdown: String,
    pub html: String,
    pub text: String,
    /// Links inside the item, as `Link` elements.
    pub links: Vec<Element>,
    /// Images inside the item, as `Image` elements.
    pub images: Vec<Element>,
}

impl Element {
    pub(crate) fn new(kind: ElementKind, markdown: String, html: String, text: String) -> Self {
        Self {
            kind,
            markdown,
            html,
            text,
            inline: Vec::new(),
        }
    }

    pub(crate) fn with_inline(mut self, inline: Vec<Element>) -> Self {
        self.inline = inline;
        self
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
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

    pub fn is_heading(&self) -> bool {
        matches!(self.kind, ElementKind::Heading { .. })
    }

    /// List items, empty for anything that is not a list.
    pub fn items(&self) -> &[ListItem] {
        match &self.kind {
            ElementKind::List { items, .. } => items,
            _ => &[],
        }
    }

    /// Links and images inside this element's text, in source order.
    pub fn inline(&self) -> &[Element] {
        &self.inline
    }

    /// Inline links and images, then those nested in list items.
    pub(crate) fn nested(&self) -> impl Iterator<Item = &Element> {
        self.inline.iter().chain(
            self.items()
                .iter()
                .flat_map(|item| item.links.iter().chain(item.images.iter())),
        )
    }
}

use super::{block::Block, element::Element, element::ElementKind};

/// A document-ordered selection of elements with combined views.
#[derive(Debug, Clone, Default)]
pub struct ElementCollection<'a> {
    elements: Vec<&'a Element>,
}

impl<'a> ElementCollection<'a> {
    pub fn new(elements: Vec<&'a Element>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Element> {
        self.elements.get(index).copied()
    }

    pub fn first(&self) -> Option<&'a Element> {
        self.get(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Element> + '_ {
        self.elements.iter().copied()
    }

    /// Concatenated HTML of every element.
    pub fn html(&self) -> String {
        self.elements.iter().map(|e| e.html()).collect()
    }

    /// Plain text of every element, one per line.
    pub fn text(&self) -> String {
        self.joined(Element::text, "\n")
    }

    pub fn markdown(&self) -> String {
        self.joined(Element::markdown, "\n\n")
    }

    fn joined(&self, part: fn(&Element) -> &str, sep: &str) -> String {
        self.elements
            .iter()
            .map(|e| part(e))
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(sep)
    }
}

impl<'a> IntoIterator for ElementCollection<'a> {
    type Item = &'a Element;
    type IntoIter = std::vec::IntoIter<&'a Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

/// Aggregate element access shared by every scope of the tree.
///
/// Collections cover the scope's own content and all of its descendants,
/// including links and images nested in list items.
pub trait ContentScope {
    /// Pushes every element of the scope, in document order.
    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a Element>);

    fn all_elements(&self) -> ElementCollection<'_> {
        let mut out = Vec::new();
        self.collect_elements(&mut out);
        ElementCollection::new(out)
    }

    fn select(&self, keep: fn(&ElementKind) -> bool) -> ElementCollection<'_> {
        let mut out = Vec::new();
        self.collect_elements(&mut out);
        out.retain(|e| keep(e.kind()));
        ElementCollection::new(out)
    }

    fn images(&self) -> ElementCollection<'_> {
        self.select(|k| matches!(k, ElementKind::Image { .. }))
    }

    fn links(&self) -> ElementCollection<'_> {
        self.select(|k| matches!(k, ElementKind::Link { .. }))
    }

    fn lists(&self) -> ElementCollection<'_> {
        self.select(|k| matches!(k, ElementKind::List { .. }))
    }

    fn paragraphs(&self) -> ElementCollection<'_> {
        self.select(|k| matches!(k, ElementKind::Paragraph))
    }

    fn headings(&self) -> ElementCollection<'_> {
        self.select(|k| matches!(k, ElementKind::Heading { .. }))
    }
}

impl ContentScope for Block {
    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a Element>) {
        self.walk(&mut |block| {
            for element in block.elements() {
                out.push(element);
                out.extend(element.nested());
            }
        });
    }
}

impl ContentScope for [Block] {
    fn collect_elements<'a>(&'a self, out: &mut Vec<&'a Element>) {
        for block in self {
            block.collect_elements(out);
        }
    }
}

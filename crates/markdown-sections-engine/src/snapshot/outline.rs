use std::fmt::Write;

use crate::parsing::rope::preview;
use crate::tree::{Block, Document, Element, ElementKind, Field, FieldValue};

const PREVIEW: usize = 40;

/// Render the document tree as an indented outline.
///
/// ```text
/// header title = Home
/// section[0] intro
///   field title (regular, heading): Welcome
///   block h1 [title]
///     heading: Welcome
///   subsection <default>
/// ```
pub fn render_outline(doc: &Document) -> String {
    let mut out = String::new();
    for (key, value) in doc.header() {
        line(&mut out, 0, &format!("header {key} = {}", preview(value, PREVIEW)));
    }
    for section in doc.sections() {
        let name = section.name().unwrap_or("<unnamed>");
        line(&mut out, 0, &format!("section[{}] {name}", section.index()));
        fields(&mut out, 1, section.fields());
        blocks(&mut out, 1, section.blocks());
        for sub in section.subsections() {
            line(
                &mut out,
                1,
                &format!("subsection {}", sub.name().unwrap_or("<default>")),
            );
            fields(&mut out, 2, sub.fields());
            blocks(&mut out, 2, sub.blocks());
        }
    }
    out
}

fn line(out: &mut String, depth: usize, text: &str) {
    let _ = writeln!(out, "{}{}", "  ".repeat(depth), text.trim_end());
}

fn fields(out: &mut String, depth: usize, fields: &[Field]) {
    for field in fields {
        line(
            out,
            depth,
            &format!(
                "field {} ({}, {}): {}",
                field.name(),
                field.kind(),
                field.field_type(),
                preview(field.text(), PREVIEW)
            ),
        );
        if let FieldValue::Sequence(items) = field.value() {
            line(out, depth + 1, &format!("{} item(s)", items.len()));
        }
    }
}

fn blocks(out: &mut String, depth: usize, blocks: &[Block]) {
    for block in blocks {
        let mut head = match block.level() {
            Some(level) => format!("block h{level}"),
            None => "block (orphan)".to_string(),
        };
        if !block.fields().is_empty() {
            let _ = write!(head, " [{}]", block.fields().join(", "));
        }
        line(out, depth, &head);
        for element in block.elements() {
            self::element(out, depth + 1, element);
        }
        self::blocks(out, depth + 1, block.children());
    }
}

fn element(out: &mut String, depth: usize, element: &Element) {
    let detail = match element.kind() {
        ElementKind::Image { src, .. } => format!("image: {src}"),
        ElementKind::Link { href, text } => format!("link: {text} -> {href}"),
        ElementKind::List { ordered, items } => format!(
            "list ({}, {} item(s)): {}",
            if *ordered { "ordered" } else { "unordered" },
            items.len(),
            preview(element.text(), PREVIEW)
        ),
        kind => format!("{}: {}", kind.label(), preview(element.text(), PREVIEW)),
    };
    line(out, depth, &detail);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn outline_lists_sections_fields_and_blocks() {
        let doc = Document::parse(
            "---\ntitle: Home\n---\n<!-- section:intro -->\n<!-- title -->\n# Welcome\n\nHello there",
        )
        .unwrap();
        let expected = "\
header title = Home
section[0] intro
  field title (regular, heading): Welcome
  block h1 [title]
    heading: Welcome
    paragraph: Hello there
  subsection <default>
    field title (regular, heading): Welcome
    block h1 [title]
      heading: Welcome
      paragraph: Hello there
";
        assert_eq!(render_outline(&doc), expected);
    }

    #[test]
    fn empty_document_renders_nothing() {
        let doc = Document::parse("").unwrap();
        assert_eq!(render_outline(&doc), "");
    }
}

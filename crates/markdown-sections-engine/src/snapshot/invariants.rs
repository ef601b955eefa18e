use xi_rope::Rope;

use crate::parsing::rope::slice_to_string;
use crate::tree::{Block, Document, FieldItem, FieldValue};

/// Panics if the tree breaks a structural guarantee.
///
/// Sections are indexed in document order, child heading levels strictly
/// exceed their parent's, orphan blocks only appear as roots, and every block
/// span lies within the body and starts on its own heading.
pub fn check(doc: &Document) {
    let rope = Rope::from(doc.body());
    for (position, section) in doc.sections().iter().enumerate() {
        assert_eq!(section.index(), position, "sections out of document order");
        check_roots(&rope, section.blocks());
        for sub in section.subsections() {
            check_roots(&rope, sub.blocks());
            assert_eq!(sub.section_index(), section.index());
        }
        for field in section.fields() {
            match field.value() {
                FieldValue::Block(b) => check_block(&rope, b),
                FieldValue::Sequence(items) => {
                    for item in items {
                        if let FieldItem::Block(b) = item {
                            check_block(&rope, b);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

fn check_roots(rope: &Rope, blocks: &[Block]) {
    for b in blocks {
        check_block(rope, b);
    }
}

fn check_block(rope: &Rope, block: &Block) {
    let span = block.span();
    assert!(
        span.start <= span.end && span.end <= rope.len(),
        "block span out of bounds: {:?} (body len: {})",
        span,
        rope.len()
    );
    if let Some(heading) = block.heading() {
        let first = slice_to_string(rope, span);
        assert!(
            first.trim_start().starts_with('#'),
            "heading block span does not start at its heading: {first:?} ({})",
            heading.text()
        );
    }
    for child in block.children() {
        assert!(!child.is_orphan(), "orphan block nested under {:?}", span);
        assert!(
            child.level() > block.level(),
            "child level {:?} not deeper than parent {:?}",
            child.level(),
            block.level()
        );
        assert!(
            child.span().start >= span.start,
            "child span {:?} starts before parent {:?}",
            child.span(),
            span
        );
        check_block(rope, child);
    }
}

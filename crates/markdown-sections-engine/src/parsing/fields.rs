//! # Field Binder
//!
//! Turns a field plan (marker plus captured lines) into a [`Field`].
//!
//! - A regular field whose capture starts with a heading binds the block
//!   built from it; otherwise it binds the first element it captured. Its
//!   markdown, HTML and text are those of the bound value.
//! - An extended field binds a sequence: heading blocks as block items,
//!   content before the first heading as element items.

use crate::error::ParseError;
use crate::render::plain_text;
use crate::tree::{Field, FieldItem, FieldKind, FieldValue};

use super::{Context, assemble::FieldPlan, blocks::BlockTreeBuilder, blocks::join_lines};

pub fn bind_field(plan: &FieldPlan, ctx: &Context<'_>) -> Result<Field, ParseError> {
    let field = if plan.extended {
        let markdown = join_lines(ctx.lines, &plan.capture);
        let html = ctx.extractor.renderer().render(&markdown);
        let text = plain_text(&html);
        let value = sequence(plan, ctx)?;
        Field::new(plan.name.clone(), FieldKind::Extended, value, markdown, html, text)
    } else {
        let value = single(plan, ctx)?;
        let (markdown, html, text) = match &value {
            FieldValue::Block(b) => (b.markdown(), b.html(), b.text()),
            FieldValue::Element(e) => (e.markdown(), e.html(), e.text()),
            _ => ("", "", ""),
        };
        let (markdown, html, text) = (markdown.to_string(), html.to_string(), text.to_string());
        Field::new(plan.name.clone(), FieldKind::Regular, value, markdown, html, text)
    };
    log::trace!("field '{}' bound at line {}", plan.name, plan.line);
    Ok(field)
}

fn starts_with_heading(plan: &FieldPlan, ctx: &Context<'_>) -> bool {
    plan.capture
        .iter()
        .map(|&i| &ctx.lines[i])
        .find(|l| !l.is_blank() && !l.is_marker())
        .is_some_and(|l| l.heading_level().is_some())
}

/// A regular field binds one thing: the heading block it starts with, or
/// else the first element it captured.
fn single(plan: &FieldPlan, ctx: &Context<'_>) -> Result<FieldValue, ParseError> {
    if starts_with_heading(plan, ctx) {
        let blocks = BlockTreeBuilder::new(ctx).build(&plan.capture)?;
        return Ok(blocks
            .into_iter()
            .next()
            .map_or(FieldValue::Empty, FieldValue::Block));
    }
    let markdown = join_lines(ctx.lines, &plan.capture);
    Ok(ctx
        .extractor
        .extract(&markdown)
        .into_iter()
        .next()
        .map_or(FieldValue::Empty, FieldValue::Element))
}

fn sequence(plan: &FieldPlan, ctx: &Context<'_>) -> Result<FieldValue, ParseError> {
    let blocks = BlockTreeBuilder::new(ctx).build(&plan.capture)?;
    let mut items = Vec::new();
    for block in blocks {
        if block.is_orphan() {
            items.extend(block.elements().iter().cloned().map(FieldItem::Element));
        } else {
            items.push(FieldItem::Block(block));
        }
    }
    Ok(FieldValue::Sequence(items))
}

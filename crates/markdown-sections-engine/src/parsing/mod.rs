//! # Parsing
//!
//! raw text → header split → line scan → section/subsection assembly →
//! per-scope block trees → field binding and element extraction → tree.
//!
//! Everything here is local to one call, so independent parses can run on
//! separate threads.

pub mod assemble;
pub mod blocks;
pub mod elements;
pub mod fields;
pub mod header;
pub mod rope;
pub mod scan;
pub mod stack;

use xi_rope::Rope;

use crate::error::ParseError;
use crate::options::ParseOptions;
use crate::render::HtmlRenderer;
use crate::tree::{Document, Field, Section, Subsection};

use assemble::{SectionPlan, assemble};
use blocks::BlockTreeBuilder;
use elements::Extractor;
use fields::bind_field;
use header::split_header;
use scan::{Line, scan};

/// Shared, read-only state for building one document's tree.
pub struct Context<'r> {
    pub lines: &'r [Line],
    pub extractor: Extractor<'r>,
    pub max_depth: usize,
}

pub fn parse_document(
    text: &str,
    options: &ParseOptions,
    renderer: &dyn HtmlRenderer,
) -> Result<Document, ParseError> {
    let header = split_header(text, &options.header_delimiter);
    let rope = Rope::from(header.body.as_str());
    let lines = scan(&rope);
    let plans = assemble(&lines, options.max_depth)?;

    let ctx = Context {
        lines: &lines,
        extractor: Extractor::new(renderer, options.cmark_options()),
        max_depth: options.max_depth,
    };
    let sections = plans
        .into_iter()
        .enumerate()
        .map(|(index, plan)| build_section(index, plan, &ctx))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "parsed {} lines into {} section(s)",
        lines.len(),
        sections.len()
    );
    Ok(Document::new(text.to_string(), header, sections))
}

fn build_section(index: usize, plan: SectionPlan, ctx: &Context<'_>) -> Result<Section, ParseError> {
    let builder = BlockTreeBuilder::new(ctx);
    let blocks = builder.build(&plan.lines)?;
    let fields = plan
        .fields
        .iter()
        .map(|f| bind_field(f, ctx))
        .collect::<Result<Vec<Field>, _>>()?;

    let mut subsections = Vec::with_capacity(plan.subsections.len());
    for (slot, sub) in plan.subsections.into_iter().enumerate() {
        let sub_fields = plan
            .fields
            .iter()
            .zip(&fields)
            .filter(|(p, _)| p.subsection == slot)
            .map(|(_, f)| f.clone())
            .collect();
        subsections.push(Subsection::new(
            sub.name,
            index,
            builder.build(&sub.lines)?,
            sub_fields,
        ));
    }

    Ok(Section::new(plan.name, index, subsections, blocks, fields))
}

use crate::error::ParseError;
use crate::render::plain_text;
use crate::tree::Block;

use crate::parsing::Context;
use super::content::{content_span, has_content, join_lines};

/// Lines of one block before tree construction: an optional heading line and
/// the block's own lines up to the next heading.
#[derive(Debug, Default)]
struct Segment {
    heading: Option<(usize, u8)>,
    lines: Vec<usize>,
    carried_fields: Vec<String>,
}

impl Segment {
    fn indices(&self) -> Vec<usize> {
        self.heading
            .map(|(i, _)| i)
            .into_iter()
            .chain(self.lines.iter().copied())
            .collect()
    }
}

/// Builds the block forest of one scope.
///
/// Leading content before the first heading becomes an orphan block; if it
/// is only field markers, those markers are handed to the first heading
/// block instead. Headings nest by level with an ancestor stack.
pub struct BlockTreeBuilder<'c, 'r> {
    ctx: &'c Context<'r>,
}

impl<'c, 'r> BlockTreeBuilder<'c, 'r> {
    pub fn new(ctx: &'c Context<'r>) -> Self {
        Self { ctx }
    }

    pub fn build(&self, indices: &[usize]) -> Result<Vec<Block>, ParseError> {
        let segments = self.segments(indices);
        let mut roots = Vec::new();
        let mut stack: Vec<Block> = Vec::new();

        for segment in segments {
            let block = self.block(&segment);
            let Some(level) = block.level() else {
                roots.push(block);
                continue;
            };
            while stack
                .last()
                .and_then(Block::level)
                .is_some_and(|top| top >= level)
            {
                if let Some(done) = stack.pop() {
                    attach(done, &mut stack, &mut roots);
                }
            }
            if stack.len() >= self.ctx.max_depth {
                return Err(ParseError::Structure {
                    depth: stack.len() + 1,
                    limit: self.ctx.max_depth,
                });
            }
            stack.push(block);
        }
        while let Some(done) = stack.pop() {
            attach(done, &mut stack, &mut roots);
        }
        Ok(roots)
    }

    fn segments(&self, indices: &[usize]) -> Vec<Segment> {
        let lines = self.ctx.lines;
        let mut segments = vec![Segment::default()];
        for &i in indices {
            match lines[i].heading_level() {
                Some(level) => segments.push(Segment {
                    heading: Some((i, level)),
                    ..Segment::default()
                }),
                None => {
                    if let Some(current) = segments.last_mut() {
                        current.lines.push(i);
                    }
                }
            }
        }

        let leading = segments.remove(0);
        if has_content(lines, &leading.lines) {
            segments.insert(0, leading);
        } else if let Some(first) = segments.first_mut() {
            first.carried_fields = field_names(self.ctx, &leading.lines);
        }
        segments
    }

    fn block(&self, segment: &Segment) -> Block {
        let lines = self.ctx.lines;
        let indices = segment.indices();
        let markdown = join_lines(lines, &indices);
        let elements = self.ctx.extractor.extract(&markdown);
        let html = self.ctx.extractor.renderer().render(&markdown);
        let text = plain_text(&html);

        let mut fields = segment.carried_fields.clone();
        fields.extend(field_names(self.ctx, &segment.lines));

        let span = content_span(lines, &indices).unwrap_or_default();
        Block::new(
            segment.heading.map(|(_, level)| level),
            elements,
            fields,
            markdown,
            html,
            text,
            span,
        )
    }
}

fn field_names(ctx: &Context<'_>, indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .filter_map(|&i| ctx.lines[i].field_marker())
        .map(str::to_string)
        .collect()
}

fn attach(done: Block, stack: &mut [Block], roots: &mut Vec<Block>) {
    match stack.last_mut() {
        Some(parent) => parent.push_child(done),
        None => roots.push(done),
    }
}

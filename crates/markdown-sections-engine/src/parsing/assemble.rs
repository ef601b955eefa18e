//! # Section/Subsection Assembler
//!
//! Walks the scanned lines once and groups them into section plans: which
//! lines belong to each section and subsection, and which lines every field
//! captures. Plans only hold line indices; the tree is built from them later.

use crate::error::ParseError;

use super::{
    scan::{Line, LineKind, Marker},
    stack::{OpenItem, OpenItemStack, OpenKind, Resolution},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionPlan {
    pub name: Option<String>,
    /// Line of the section marker, `None` for the implicit leading section.
    pub marker: Option<usize>,
    /// Exclusive end line.
    pub end: usize,
    /// Content and field-marker lines of the whole section.
    pub lines: Vec<usize>,
    pub subsections: Vec<SubsectionPlan>,
    pub fields: Vec<FieldPlan>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsectionPlan {
    /// `None` for the default subsection.
    pub name: Option<String>,
    pub lines: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPlan {
    pub name: String,
    pub extended: bool,
    /// Line of the field marker.
    pub line: usize,
    /// Line of the closer that ended an extended field.
    pub closed_at: Option<usize>,
    /// Subsection slot the marker belongs to.
    pub subsection: usize,
    /// Lines captured by the field, filled in when the section ends.
    pub capture: Vec<usize>,
}

struct SectionBuilder {
    plan: SectionPlan,
    stack: OpenItemStack,
    detached: Vec<OpenItem>,
    open_sub: Option<usize>,
    default_sub: Option<usize>,
}

impl SectionBuilder {
    fn new(name: Option<String>, marker: Option<usize>, limit: usize) -> Self {
        Self {
            plan: SectionPlan {
                name,
                marker,
                end: 0,
                lines: Vec::new(),
                subsections: Vec::new(),
                fields: Vec::new(),
            },
            stack: OpenItemStack::new(limit),
            detached: Vec::new(),
            open_sub: None,
            default_sub: None,
        }
    }

    /// Slot of the subsection new content goes to, creating the default
    /// subsection on first use.
    fn current_slot(&mut self) -> usize {
        if let Some(slot) = self.open_sub.or(self.default_sub) {
            return slot;
        }
        let slot = self.plan.subsections.len();
        self.plan.subsections.push(SubsectionPlan {
            name: None,
            lines: Vec::new(),
        });
        self.default_sub = Some(slot);
        slot
    }

    fn add_line(&mut self, idx: usize) -> usize {
        let slot = self.current_slot();
        self.plan.lines.push(idx);
        self.plan.subsections[slot].lines.push(idx);
        slot
    }

    /// Blank lines never create the default subsection on their own.
    fn add_blank(&mut self, idx: usize) {
        if self.open_sub.is_some() || self.default_sub.is_some() {
            self.add_line(idx);
        }
    }

    fn open_subsection(&mut self, name: &str, idx: usize) -> Result<(), ParseError> {
        let previous = self.stack.close_nearest_kind(OpenKind::Subsection);
        self.apply(previous, idx);

        let slot = self.plan.subsections.len();
        self.plan.subsections.push(SubsectionPlan {
            name: Some(name.to_string()),
            lines: Vec::new(),
        });
        self.open_sub = Some(slot);
        self.stack.push(OpenItem {
            kind: OpenKind::Subsection,
            name: name.to_string(),
            slot,
        })
    }

    fn open_field(&mut self, name: &str, extended: bool, idx: usize) -> Result<(), ParseError> {
        let subsection = self.add_line(idx);
        let slot = self.plan.fields.len();
        self.plan.fields.push(FieldPlan {
            name: name.to_string(),
            extended,
            line: idx,
            closed_at: None,
            subsection,
            capture: Vec::new(),
        });
        if extended {
            self.stack.push(OpenItem {
                kind: OpenKind::ExtendedField,
                name: name.to_string(),
                slot,
            })?;
        }
        Ok(())
    }

    fn apply(&mut self, resolution: Resolution, idx: usize) {
        for item in resolution.closed {
            self.end_item(&item, idx);
        }
        self.detached.extend(resolution.detached);
    }

    fn end_item(&mut self, item: &OpenItem, idx: usize) {
        match item.kind {
            OpenKind::Subsection => {
                if self.open_sub == Some(item.slot) {
                    self.open_sub = None;
                }
            }
            OpenKind::ExtendedField => {
                if let Some(field) = self.plan.fields.get_mut(item.slot) {
                    field.closed_at = Some(idx);
                }
            }
        }
    }

    fn closer(&mut self, marker: &Marker, idx: usize) {
        let resolution = match marker {
            Marker::CloseTop => self.stack.close_top(),
            Marker::CloseSubsection { name: None } => {
                self.stack.close_nearest_kind(OpenKind::Subsection)
            }
            Marker::CloseSubsection { name: Some(name) } => {
                self.stack.close_nearest_matching(OpenKind::Subsection, name)
            }
            Marker::CloseField { name } => self
                .stack
                .close_nearest_matching(OpenKind::ExtendedField, name),
            _ => return,
        };
        if resolution.closed.is_empty() {
            log::trace!("line {idx}: closer {marker:?} matched nothing, ignored");
        }
        self.apply(resolution, idx);
    }

    /// Closes everything still open at the section boundary `end` and
    /// resolves every field's captured lines.
    fn finish(mut self, end: usize, lines: &[Line]) -> SectionPlan {
        for item in self.stack.flush() {
            log::trace!("line {end}: {:?} '{}' flushed at section end", item.kind, item.name);
            self.end_item(&item, end);
        }
        for item in std::mem::take(&mut self.detached) {
            self.end_item(&item, end);
        }
        self.plan.end = end;

        for field in &mut self.plan.fields {
            field.capture = if field.extended {
                let stop = field.closed_at.unwrap_or(end);
                (field.line + 1..stop).collect()
            } else {
                regular_capture(lines, field.line + 1, end)
            };
        }
        self.plan
    }
}

/// Lines a regular field captures: leading blank lines are skipped, then
/// everything up to the next blank line, marker, heading or section end. A
/// heading only ever opens a capture.
fn regular_capture(lines: &[Line], from: usize, end: usize) -> Vec<usize> {
    let start = (from..end)
        .find(|&i| !lines[i].is_blank())
        .unwrap_or(end);
    (start..end)
        .take_while(|&i| {
            let line = &lines[i];
            !line.is_blank() && !line.is_marker() && (i == start || line.heading_level().is_none())
        })
        .collect()
}

/// Groups scanned lines into section plans.
pub struct SectionAssembler<'a> {
    lines: &'a [Line],
    limit: usize,
    current: Option<SectionBuilder>,
    out: Vec<SectionPlan>,
}

impl<'a> SectionAssembler<'a> {
    pub fn new(lines: &'a [Line], limit: usize) -> Self {
        Self {
            lines,
            limit,
            current: None,
            out: Vec::new(),
        }
    }

    pub fn push(&mut self, idx: usize) -> Result<(), ParseError> {
        let lines = self.lines;
        let line = &lines[idx];
        match &line.kind {
            LineKind::Marker(Marker::Section { name }) => {
                self.finish_current(idx);
                self.current = Some(SectionBuilder::new(name.clone(), Some(idx), self.limit));
            }
            LineKind::Marker(Marker::Subsection { name }) => {
                self.current().open_subsection(name, idx)?;
            }
            LineKind::Marker(Marker::Field { name, extended }) => {
                self.current().open_field(name, *extended, idx)?;
            }
            LineKind::Marker(closer) => self.current().closer(closer, idx),
            LineKind::Blank => self.current().add_blank(idx),
            LineKind::Text | LineKind::Heading { .. } => {
                self.current().add_line(idx);
            }
        }
        Ok(())
    }

    pub fn finish(mut self) -> Vec<SectionPlan> {
        self.finish_current(self.lines.len());
        self.out
    }

    fn current(&mut self) -> &mut SectionBuilder {
        let limit = self.limit;
        self.current
            .get_or_insert_with(|| SectionBuilder::new(None, None, limit))
    }

    fn finish_current(&mut self, end: usize) {
        let Some(builder) = self.current.take() else {
            return;
        };
        let plan = builder.finish(end, self.lines);
        let has_content = plan.lines.iter().any(|&i| !self.lines[i].is_blank());
        if plan.marker.is_none() && !has_content {
            log::trace!("dropping empty leading section");
            return;
        }
        self.out.push(plan);
    }
}

/// Runs the assembler over every line.
pub fn assemble(lines: &[Line], limit: usize) -> Result<Vec<SectionPlan>, ParseError> {
    let mut assembler = SectionAssembler::new(lines, limit);
    for idx in 0..lines.len() {
        assembler.push(idx)?;
    }
    Ok(assembler.finish())
}

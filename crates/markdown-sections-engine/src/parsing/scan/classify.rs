use xi_rope::Rope;

use crate::parsing::rope::{LineRef, Span, lines_with_spans};

use super::kinds::{AtxHeading, CodeFence, CommentMarker, FenceSig, Marker};

/// What a body line is, judged from the line itself plus fence state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Text,
    Heading { level: u8 },
    Marker(Marker),
}

/// One classified body line. Its index in the scanned sequence is its position.
#[derive(Debug, Clone)]
pub struct Line {
    /// Span of the line content (newline excluded) in the body.
    pub span: Span,
    /// Line content without the newline.
    pub text: String,
    pub kind: LineKind,
}

impl Line {
    pub fn is_marker(&self) -> bool {
        matches!(self.kind, LineKind::Marker(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }

    pub fn heading_level(&self) -> Option<u8> {
        match self.kind {
            LineKind::Heading { level } => Some(level),
            _ => None,
        }
    }

    pub fn field_marker(&self) -> Option<&str> {
        match &self.kind {
            LineKind::Marker(Marker::Field { name, .. }) => Some(name),
            _ => None,
        }
    }
}

/// Classifies body lines into markers, headings, blank and text lines.
///
/// Tracks fenced code so nothing inside a fence is taken for structure.
#[derive(Debug, Default)]
pub struct LineScanner {
    fence: Option<FenceSig>,
}

impl LineScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classify(&mut self, lr: &LineRef) -> Line {
        let text = lr.content();
        let kind = self.kind_of(text);
        Line {
            span: lr.content_span(),
            text: text.to_string(),
            kind,
        }
    }

    fn kind_of(&mut self, text: &str) -> LineKind {
        let sig = CodeFence::sig(text);
        if let Some(open) = self.fence {
            if CodeFence::closes(open, sig) {
                self.fence = None;
            }
            return LineKind::Text;
        }
        if let Some(sig) = sig {
            self.fence = Some(sig);
            return LineKind::Text;
        }
        if text.trim().is_empty() {
            return LineKind::Blank;
        }
        if let Some(marker) = CommentMarker::parse(text) {
            return LineKind::Marker(marker);
        }
        if let Some(level) = AtxHeading::level(text) {
            return LineKind::Heading { level };
        }
        LineKind::Text
    }
}

/// Scans the whole body into its ordered line sequence.
pub fn scan(rope: &Rope) -> Vec<Line> {
    let mut scanner = LineScanner::new();
    lines_with_spans(rope)
        .filter(|lr| !lr.text.is_empty())
        .map(|lr| scanner.classify(&lr))
        .collect()
}

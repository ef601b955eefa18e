//! The comment-style marker grammar.
//!
//! One marker per line, written as an HTML comment on an otherwise empty line:
//! `section`, `section:NAME`, `sub:NAME`, `NAME`, `NAME...`, `/`, `/sub`,
//! `/sub:NAME`, `/NAME`. Reserved forms (`section`, `sub:`, leading `/`) are
//! tried before the generic field-name form. Anything else inside a comment is
//! not a marker and stays ordinary content.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// A recognized marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "marker", rename_all = "snake_case")]
pub enum Marker {
    /// `section` or `section:NAME`.
    Section { name: Option<String> },
    /// `sub:NAME`.
    Subsection { name: String },
    /// `NAME` (regular) or `NAME...` (extended, bleeding).
    Field { name: String, extended: bool },
    /// `/`: closes whatever is on top of the stack.
    CloseTop,
    /// `/sub` (no name) or `/sub:NAME`.
    CloseSubsection { name: Option<String> },
    /// `/NAME`.
    CloseField { name: String },
}

pub struct CommentMarker;

impl CommentMarker {
    pub const OPEN: &'static str = "<!--";
    pub const CLOSE: &'static str = "-->";
    pub const SECTION: &'static str = "section";
    pub const SUB: &'static str = "sub";
    pub const CLOSER: char = '/';
    pub const EXTENDED: &'static str = "...";

    /// Parses a full line as a marker.
    ///
    /// Four or more spaces (or a tab) of indentation make the line indented
    /// code, never a marker.
    pub fn parse(line: &str) -> Option<Marker> {
        let indent = line.len() - line.trim_start_matches(' ').len();
        if indent > 3 || line[indent..].starts_with('\t') {
            return None;
        }
        let inner = line
            .trim()
            .strip_prefix(Self::OPEN)?
            .strip_suffix(Self::CLOSE)?
            .trim();
        Self::classify(inner)
    }

    /// Classifies the text between the comment delimiters.
    pub fn classify(inner: &str) -> Option<Marker> {
        if let Some(rest) = inner.strip_prefix(Self::CLOSER) {
            return Self::classify_closer(rest.trim_start());
        }
        if inner == Self::SECTION {
            return Some(Marker::Section { name: None });
        }
        if let Some(name) = Self::prefixed_name(inner, Self::SECTION) {
            return name.map(|name| Marker::Section { name: Some(name) });
        }
        if let Some(name) = Self::prefixed_name(inner, Self::SUB) {
            return name.map(|name| Marker::Subsection { name });
        }

        let (name, extended) = match inner.strip_suffix(Self::EXTENDED) {
            Some(name) => (name, true),
            None => (inner, false),
        };
        is_name(name).then(|| Marker::Field {
            name: name.to_string(),
            extended,
        })
    }

    fn classify_closer(rest: &str) -> Option<Marker> {
        if rest.is_empty() {
            return Some(Marker::CloseTop);
        }
        if rest == Self::SUB {
            return Some(Marker::CloseSubsection { name: None });
        }
        if let Some(name) = Self::prefixed_name(rest, Self::SUB) {
            return name.map(|name| Marker::CloseSubsection { name: Some(name) });
        }
        is_name(rest).then(|| Marker::CloseField {
            name: rest.to_string(),
        })
    }

    /// `Some(Some(name))` for `prefix:NAME`, `Some(None)` when the reserved
    /// prefix is present but the name is malformed, `None` when the prefix
    /// does not apply at all.
    fn prefixed_name(inner: &str, prefix: &str) -> Option<Option<String>> {
        let rest = inner.strip_prefix(prefix)?.trim_start();
        let name = rest.strip_prefix(':')?.trim();
        Some(is_name(name).then(|| name.to_string()))
    }
}

fn name_regex() -> &'static Regex {
    static NAME: OnceLock<Regex> = OnceLock::new();
    NAME.get_or_init(|| Regex::new(r"^[A-Za-z0-9_][A-Za-z0-9_-]*$").expect("name regex is valid"))
}

pub fn is_name(s: &str) -> bool {
    name_regex().is_match(s)
}

//! # Open-Item Stack
//!
//! Per-section stack of open bleeding constructs: subsections and extended
//! fields. Sections are never pushed. Closers resolve against it in three
//! ways: pop the top (`/`), remove the nearest of a kind (`/sub`), or remove
//! the nearest matching kind and name together with everything above it
//! (`/sub:NAME`, `/NAME`). A closer that matches nothing is a no-op.

use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenKind {
    Subsection,
    ExtendedField,
}

/// A construct that is still open. Parse-time only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenItem {
    pub kind: OpenKind,
    pub name: String,
    /// Index of the item in the section's subsection or field list.
    pub slot: usize,
}

/// What a closer did to the stack.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Items that end at the closer.
    pub closed: Vec<OpenItem>,
    /// Items taken off the stack without ending; they keep bleeding until
    /// the section ends.
    pub detached: Vec<OpenItem>,
}

#[derive(Debug)]
pub struct OpenItemStack {
    items: Vec<OpenItem>,
    limit: usize,
}

impl OpenItemStack {
    pub fn new(limit: usize) -> Self {
        Self {
            items: Vec::new(),
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: OpenItem) -> Result<(), ParseError> {
        if self.items.len() >= self.limit {
            return Err(ParseError::Structure {
                depth: self.items.len() + 1,
                limit: self.limit,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// `/`: closes the top entry whatever it is.
    pub fn close_top(&mut self) -> Resolution {
        Resolution {
            closed: self.items.pop().into_iter().collect(),
            detached: vec![],
        }
    }

    /// `/sub`: closes the nearest entry of `kind`. Entries above it leave the
    /// stack without being closed.
    pub fn close_nearest_kind(&mut self, kind: OpenKind) -> Resolution {
        let Some(pos) = self.items.iter().rposition(|item| item.kind == kind) else {
            return Resolution::default();
        };
        let mut removed = self.items.split_off(pos);
        let target = removed.remove(0);
        Resolution {
            closed: vec![target],
            detached: removed,
        }
    }

    /// `/sub:NAME`, `/NAME`: closes the nearest entry matching kind and name
    /// and everything opened after it.
    pub fn close_nearest_matching(&mut self, kind: OpenKind, name: &str) -> Resolution {
        let Some(pos) = self
            .items
            .iter()
            .rposition(|item| item.kind == kind && item.name == name)
        else {
            return Resolution::default();
        };
        Resolution {
            closed: self.items.split_off(pos),
            detached: vec![],
        }
    }

    /// Section boundary: every open entry is closed.
    pub fn flush(&mut self) -> Vec<OpenItem> {
        std::mem::take(&mut self.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn item(kind: OpenKind, name: &str, slot: usize) -> OpenItem {
        OpenItem {
            kind,
            name: name.to_string(),
            slot,
        }
    }

    fn stack_of(items: &[OpenItem]) -> OpenItemStack {
        let mut stack = OpenItemStack::new(64);
        for i in items {
            stack.push(i.clone()).unwrap();
        }
        stack
    }

    #[test]
    fn close_top_ignores_kind_and_name() {
        let sub = item(OpenKind::Subsection, "a", 0);
        let field = item(OpenKind::ExtendedField, "desc", 0);
        let mut stack = stack_of(&[sub.clone(), field.clone()]);
        assert_eq!(stack.close_top().closed, vec![field]);
        assert_eq!(stack.close_top().closed, vec![sub]);
        assert_eq!(stack.close_top(), Resolution::default());
    }

    #[test]
    fn close_nearest_kind_detaches_entries_above() {
        let sub = item(OpenKind::Subsection, "x", 0);
        let field = item(OpenKind::ExtendedField, "desc", 0);
        let mut stack = stack_of(&[sub.clone(), field.clone()]);
        let res = stack.close_nearest_kind(OpenKind::Subsection);
        assert_eq!(res.closed, vec![sub]);
        assert_eq!(res.detached, vec![field]);
        assert!(stack.is_empty());
    }

    #[test]
    fn close_nearest_matching_removes_everything_above() {
        let outer = item(OpenKind::ExtendedField, "a", 0);
        let sub = item(OpenKind::Subsection, "s", 0);
        let inner = item(OpenKind::ExtendedField, "b", 1);
        let mut stack = stack_of(&[outer.clone(), sub.clone(), inner.clone()]);
        let res = stack.close_nearest_matching(OpenKind::ExtendedField, "a");
        assert_eq!(res.closed, vec![outer, sub, inner]);
        assert!(res.detached.is_empty());
        assert!(stack.is_empty());
    }

    #[test]
    fn nearest_match_is_searched_from_the_top() {
        let first = item(OpenKind::ExtendedField, "a", 0);
        let second = item(OpenKind::ExtendedField, "a", 1);
        let mut stack = stack_of(&[first.clone(), second.clone()]);
        assert_eq!(
            stack
                .close_nearest_matching(OpenKind::ExtendedField, "a")
                .closed,
            vec![second]
        );
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn orphan_closers_are_no_ops() {
        let field = item(OpenKind::ExtendedField, "a", 0);
        let mut stack = stack_of(&[field]);
        assert_eq!(
            stack.close_nearest_matching(OpenKind::ExtendedField, "zzz"),
            Resolution::default()
        );
        assert_eq!(
            stack.close_nearest_kind(OpenKind::Subsection),
            Resolution::default()
        );
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn push_beyond_limit_is_a_structure_error() {
        let mut stack = OpenItemStack::new(1);
        stack.push(item(OpenKind::ExtendedField, "a", 0)).unwrap();
        let err = stack.push(item(OpenKind::ExtendedField, "b", 1)).unwrap_err();
        assert!(matches!(err, ParseError::Structure { depth: 2, limit: 1 }));
    }

    #[test]
    fn flush_empties_stack_in_order() {
        let a = item(OpenKind::ExtendedField, "a", 0);
        let b = item(OpenKind::Subsection, "b", 0);
        let mut stack = stack_of(&[a.clone(), b.clone()]);
        assert_eq!(stack.flush(), vec![a, b]);
        assert!(stack.is_empty());
    }
}

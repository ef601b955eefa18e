/// Name → position lookup where the first occurrence of a name wins.
///
/// Positional lists keep every entry, duplicates included; this table only
/// answers "which entry does this name refer to". Names stay in the order
/// they first appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameIndex(Vec<(String, usize)>);

impl NameIndex {
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut entries: Vec<(String, usize)> = Vec::new();
        for (i, name) in names.into_iter().enumerate() {
            if let Some(name) = name
                && !entries.iter().any(|(n, _)| n == name)
            {
                entries.push((name.to_string(), i));
            }
        }
        Self(entries)
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.0.iter().find(|(n, _)| n == name).map(|&(_, i)| i)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_occurrence_wins_and_unnamed_entries_are_skipped() {
        let index = NameIndex::from_names([Some("a"), None, Some("b"), Some("a")]);
        assert_eq!(index.get("a"), Some(0));
        assert_eq!(index.get("b"), Some(2));
        assert_eq!(index.get("c"), None);
        assert_eq!(index.len(), 2);
        assert_eq!(index.names().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn names_keep_first_appearance_order() {
        let index = NameIndex::from_names([Some("zeta"), Some("alpha"), Some("zeta"), Some("mid")]);
        assert_eq!(index.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(index.get("alpha"), Some(1));
        assert!(index.contains("mid"));
    }
}

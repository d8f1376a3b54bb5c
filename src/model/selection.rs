//! User-chosen subset of catalog measures.

use serde::Serialize;

/// Ordered set of selected measure identifiers.
///
/// Duplicates collapse to their first occurrence, so iteration order is the
/// order in which measures were first chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    /// Builds a selection, dropping repeated identifiers.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::default();
        for id in ids {
            selection.insert(id.into());
        }
        selection
    }

    /// Parses a comma-separated identifier list (`"M1,M2"`).
    ///
    /// Whitespace around identifiers is ignored and empty entries are
    /// skipped, so `""` is the empty selection.
    pub fn parse_list(raw: &str) -> Self {
        Self::new(raw.split(',').map(str::trim).filter(|s| !s.is_empty()))
    }

    /// Appends `id` unless it is already selected. Returns `true` if added.
    pub fn insert(&mut self, id: String) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Removes `id`. Returns `true` if it was selected.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|s| s != id);
        self.ids.len() != before
    }

    /// Adds `id` if absent, removes it if present.
    pub fn toggle(&mut self, id: &str) {
        if !self.remove(id) {
            self.ids.push(id.to_string());
        }
    }

    /// Returns `true` if `id` is selected.
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    /// Selected identifiers in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_keep_first_occurrence_order() {
        let s = Selection::new(["M2", "M1", "M2", "M3", "M1"]);
        let ids: Vec<&str> = s.iter().collect();
        assert_eq!(ids, vec!["M2", "M1", "M3"]);
    }

    #[test]
    fn parse_list_trims_and_skips_empty() {
        let s = Selection::parse_list(" M1, ,M3 ,");
        let ids: Vec<&str> = s.iter().collect();
        assert_eq!(ids, vec!["M1", "M3"]);
        assert!(Selection::parse_list("").is_empty());
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut s = Selection::new(["M1"]);
        s.toggle("M3");
        assert_eq!(s.iter().collect::<Vec<_>>(), vec!["M1", "M3"]);
        s.toggle("M1");
        assert_eq!(s.iter().collect::<Vec<_>>(), vec!["M3"]);
    }
}

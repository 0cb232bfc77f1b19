//! Tracks which rows currently show their inline detail content.

use std::collections::HashSet;

use super::model::RowKey;

/// Set of expanded row keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpansionSet {
    keys: HashSet<RowKey>,
}

impl ExpansionSet {
    /// Empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when `key` is expanded.
    pub fn is_expanded(&self, key: &RowKey) -> bool {
        self.keys.contains(key)
    }

    /// Flips membership of `key` and returns whether it is now expanded.
    pub fn toggle(&mut self, key: RowKey) -> bool {
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    /// Copy of this set with `key` flipped, plus its new state.
    pub fn toggled(&self, key: RowKey) -> (Self, bool) {
        let mut next = self.clone();
        let expanded = next.toggle(key);
        (next, expanded)
    }

    /// Number of expanded rows.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` when no row is expanded.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterates the expanded keys in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &RowKey> {
        self.keys.iter()
    }
}

impl FromIterator<RowKey> for ExpansionSet {
    fn from_iter<I: IntoIterator<Item = RowKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl From<HashSet<RowKey>> for ExpansionSet {
    fn from(keys: HashSet<RowKey>) -> Self {
        Self { keys }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What a click on a data row does.
pub enum RowActivation {
    /// Toggle the row's inline detail content.
    ToggleExpansion,
    /// Forward the row to the caller's row-click handler.
    Click,
    /// Nothing is wired.
    Inert,
}

impl RowActivation {
    /// Expansion takes over row clicks whenever it is enabled.
    pub fn resolve(expandable_rows: bool, has_row_click: bool) -> Self {
        if expandable_rows {
            Self::ToggleExpansion
        } else if has_row_click {
            Self::Click
        } else {
            Self::Inert
        }
    }

    /// Returns `true` when the row should look clickable.
    pub fn is_interactive(self) -> bool {
        !matches!(self, Self::Inert)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn double_toggle_restores_the_set_and_alternates_state() {
        let original: ExpansionSet = [RowKey::Number(1)].into_iter().collect();
        let mut set = original.clone();
        let mut notifications = Vec::new();

        notifications.push(set.toggle(RowKey::Text("a".into())));
        notifications.push(set.toggle(RowKey::Text("a".into())));

        assert_eq!(set, original);
        assert_eq!(notifications, vec![true, false]);
    }

    #[test]
    fn toggled_leaves_the_source_set_alone() {
        let set = ExpansionSet::new();
        let (next, expanded) = set.toggled(RowKey::Index(2));
        assert!(expanded);
        assert!(next.is_expanded(&RowKey::Index(2)));
        assert!(set.is_empty());
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn expansion_overrides_row_click() {
        assert_eq!(RowActivation::resolve(true, true), RowActivation::ToggleExpansion);
        assert_eq!(RowActivation::resolve(false, true), RowActivation::Click);
        assert_eq!(RowActivation::resolve(false, false), RowActivation::Inert);
        assert!(!RowActivation::Inert.is_interactive());
    }
}

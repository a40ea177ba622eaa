//! Selection state management for components.
//!
//! Selection uses string IDs for stability across row replacement: when
//! a page of rows is swapped out, ids that survived keep their selected
//! state and ids that left the page are dropped.

use std::collections::HashSet;

/// ID-based selection state.
///
/// Tracks which row ids are selected. The set is always a subset of the
/// currently loaded rows; "select all" means the loaded page, never the
/// full matching result set.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Currently selected IDs
    selected: HashSet<String>,
}

impl Selection {
    /// Create a new empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all selected IDs (sorted for deterministic ordering).
    pub fn selected(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.selected.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Check if an ID is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Get the number of selected items.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Clear all selection.
    /// Returns the IDs that were deselected.
    pub fn clear(&mut self) -> Vec<String> {
        self.selected.drain().collect()
    }

    /// Toggle selection of an ID.
    /// Returns `true` if the id is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.to_string());
            true
        }
    }

    /// Select all ids from the provided list.
    /// Returns the IDs that were newly selected.
    pub fn select_all(&mut self, all_ids: &[String]) -> Vec<String> {
        let mut added = Vec::new();
        for id in all_ids {
            if self.selected.insert(id.clone()) {
                added.push(id.clone());
            }
        }
        added
    }

    /// Drop every selected id that is not in `loaded_ids`.
    ///
    /// Called when rows are replaced so selection never references a
    /// row that is no longer loaded.
    pub fn retain_loaded(&mut self, loaded_ids: &HashSet<String>) {
        self.selected.retain(|id| loaded_ids.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();
        assert!(selection.toggle("a"));
        assert!(selection.is_selected("a"));
        assert!(!selection.toggle("a"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_select_all_reports_new_ids_only() {
        let mut selection = Selection::new();
        selection.toggle("a");
        let added = selection.select_all(&["a".to_string(), "b".to_string()]);
        assert_eq!(added, ["b".to_string()]);
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_retain_loaded_drops_departed_ids() {
        let mut selection = Selection::new();
        selection.select_all(&["a".to_string(), "b".to_string(), "c".to_string()]);

        let loaded: HashSet<String> = ["b".to_string(), "d".to_string()].into();
        selection.retain_loaded(&loaded);

        assert_eq!(selection.selected(), ["b".to_string()]);
    }
}

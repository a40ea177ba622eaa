//! Table component state.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use serde::Deserialize;
use serde::Serialize;

use crate::components::selection::Selection;
use crate::prefs::PrefsError;
use crate::prefs::PrefsStore;

use super::item::{Column, TableRow};

/// Sort direction for the header indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// Persisted column preferences for one table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ColumnPrefs {
    /// Keys of hidden columns.
    pub hidden: Vec<String>,
    /// Column display order, by key.
    pub order: Vec<String>,
}

/// Internal state for the Table component.
#[derive(Debug)]
struct TableInner<R> {
    /// Column declarations, in declaration order.
    columns: Vec<Column>,
    /// The currently loaded rows (one fetched page).
    rows: Vec<R>,
    /// Keys of hidden columns.
    hidden: HashSet<String>,
    /// Column display order, by key.
    order: Vec<String>,
    /// Sort indicator: column key and direction, or unsorted.
    sort: Option<(String, Direction)>,
    /// Selection state.
    selection: Selection,
    /// Whether a fetch is in flight.
    loading: bool,
    /// Message rendered when there are no rows and nothing is loading.
    empty_message: String,
}

/// Headless table state: columns, visibility, sort indicator, and row
/// selection.
///
/// Cheap to clone; clones share state. Rows arrive from the list
/// controller via [`set_rows`](Table::set_rows) and stay rendered until
/// replaced, so a slow refresh does not blank the screen.
#[derive(Debug)]
pub struct Table<R: TableRow> {
    /// Storage key isolating this table's persisted preferences.
    storage_key: String,
    inner: Arc<RwLock<TableInner<R>>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl<R: TableRow> Table<R> {
    /// Create a table with the given preference storage key and
    /// columns.
    ///
    /// The storage key must be unique per screen so preferences for
    /// different tables don't collide.
    pub fn new(storage_key: impl Into<String>, columns: Vec<Column>) -> Self {
        let hidden = columns
            .iter()
            .filter(|c| !c.default_visible)
            .map(|c| c.key.clone())
            .collect();
        let order = columns.iter().map(|c| c.key.clone()).collect();
        Self {
            storage_key: storage_key.into(),
            inner: Arc::new(RwLock::new(TableInner {
                columns,
                rows: Vec::new(),
                hidden,
                order,
                sort: None,
                selection: Selection::new(),
                loading: false,
                empty_message: "No records found".to_string(),
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Sets the message shown when the table is empty and idle.
    pub fn with_empty_message(self, message: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.empty_message = message.into();
        }
        self
    }

    /// Returns the preference storage key.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    // -------------------------------------------------------------------------
    // Rows
    // -------------------------------------------------------------------------

    /// Get the number of loaded rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the table has no loaded rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all loaded rows.
    pub fn rows(&self) -> Vec<R> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Replace the loaded rows with a freshly fetched page.
    ///
    /// Selection is intersected with the new rows' ids: ids no longer
    /// loaded are dropped.
    pub fn set_rows(&self, rows: Vec<R>) {
        if let Ok(mut guard) = self.inner.write() {
            let loaded: HashSet<String> = rows.iter().map(TableRow::id).collect();
            guard.selection.retain_loaded(&loaded);
            guard.rows = rows;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Set whether a fetch is in flight.
    pub fn set_loading(&self, loading: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.loading != loading
        {
            guard.loading = loading;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check whether a fetch is in flight.
    pub fn loading(&self) -> bool {
        self.inner.read().map(|g| g.loading).unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Columns
    // -------------------------------------------------------------------------

    /// Get the column declarations.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Get the visible columns in display order.
    pub fn visible_columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| Self::visible_columns_inner(&g))
            .unwrap_or_default()
    }

    /// Check if a column is visible.
    pub fn is_column_visible(&self, key: &str) -> bool {
        self.inner
            .read()
            .map(|g| !g.hidden.contains(key))
            .unwrap_or(false)
    }

    /// Show or hide a column.
    ///
    /// Hiding is a no-op for unknown keys and for columns declared
    /// non-hideable.
    pub fn set_column_visible(&self, key: &str, visible: bool) {
        if let Ok(mut guard) = self.inner.write() {
            let Some(column) = guard.columns.iter().find(|c| c.key == key) else {
                return;
            };
            if !visible && !column.hideable {
                return;
            }
            let changed = if visible {
                guard.hidden.remove(key)
            } else {
                guard.hidden.insert(key.to_string())
            };
            if changed {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Set the column display order by key.
    ///
    /// Unknown keys are ignored; declared columns missing from `keys`
    /// keep their relative order at the end; non-draggable columns snap
    /// back to their declared position.
    pub fn set_column_order(&self, keys: Vec<String>) {
        if let Ok(mut guard) = self.inner.write() {
            let known: HashSet<&str> = guard.columns.iter().map(|c| c.key.as_str()).collect();
            let mut order: Vec<String> = keys
                .into_iter()
                .filter(|k| known.contains(k.as_str()))
                .collect();
            for column in &guard.columns {
                if !order.contains(&column.key) {
                    order.push(column.key.clone());
                }
            }
            for (index, column) in guard.columns.iter().enumerate() {
                if !column.draggable
                    && let Some(position) = order.iter().position(|k| k == &column.key)
                    && position != index
                {
                    let key = order.remove(position);
                    order.insert(index.min(order.len()), key);
                }
            }
            guard.order = order;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn visible_columns_inner(guard: &TableInner<R>) -> Vec<Column> {
        guard
            .order
            .iter()
            .filter(|key| !guard.hidden.contains(*key))
            .filter_map(|key| guard.columns.iter().find(|c| &c.key == key))
            .cloned()
            .collect()
    }

    // -------------------------------------------------------------------------
    // Sort indicator
    // -------------------------------------------------------------------------

    /// Get the current sort indicator (column key, direction).
    pub fn sort(&self) -> Option<(String, Direction)> {
        self.inner.read().ok().and_then(|g| g.sort.clone())
    }

    /// Cycle the sort indicator for a column.
    ///
    /// Unsorted -> ascending -> descending -> unsorted. Clicking a
    /// different column restarts at ascending. No-op for unknown or
    /// non-sortable columns.
    pub fn toggle_sort(&self, key: &str) -> Option<(String, Direction)> {
        if let Ok(mut guard) = self.inner.write() {
            let sortable = guard
                .columns
                .iter()
                .any(|c| c.key == key && c.sortable);
            if !sortable {
                return guard.sort.clone();
            }
            let next = match &guard.sort {
                Some((k, Direction::Asc)) if k == key => {
                    Some((key.to_string(), Direction::Desc))
                }
                Some((k, Direction::Desc)) if k == key => None,
                _ => Some((key.to_string(), Direction::Asc)),
            };
            guard.sort = next;
            self.dirty.store(true, Ordering::SeqCst);
            return guard.sort.clone();
        }
        None
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Get all selected row ids.
    pub fn selected_ids(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.selection.selected())
            .unwrap_or_default()
    }

    /// Check if a row id is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.inner
            .read()
            .map(|g| g.selection.is_selected(id))
            .unwrap_or(false)
    }

    /// Toggle selection of a loaded row. Returns `true` if the row is
    /// now selected. No-op for ids not currently loaded.
    pub fn toggle_select(&self, id: &str) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if !guard.rows.iter().any(|r| r.id() == id) {
                return false;
            }
            let selected = guard.selection.toggle(id);
            self.dirty.store(true, Ordering::SeqCst);
            return selected;
        }
        false
    }

    /// Select every currently loaded row.
    ///
    /// Scope is explicit: "all" means the loaded page, never the full
    /// matching result set. Returns the newly selected ids.
    pub fn select_all(&self) -> Vec<String> {
        if let Ok(mut guard) = self.inner.write() {
            let ids: Vec<String> = guard.rows.iter().map(TableRow::id).collect();
            let added = guard.selection.select_all(&ids);
            if !added.is_empty() {
                self.dirty.store(true, Ordering::SeqCst);
            }
            return added;
        }
        Vec::new()
    }

    /// Clear all selection. Returns the deselected ids.
    pub fn deselect_all(&self) -> Vec<String> {
        if let Ok(mut guard) = self.inner.write() {
            let removed = guard.selection.clear();
            if !removed.is_empty() {
                self.dirty.store(true, Ordering::SeqCst);
            }
            return removed;
        }
        Vec::new()
    }

    // -------------------------------------------------------------------------
    // Preferences
    // -------------------------------------------------------------------------

    /// Load persisted column visibility/order from the prefs store.
    ///
    /// Missing preferences leave the declared defaults in place.
    pub async fn load_prefs(&self, store: &PrefsStore) -> Result<(), PrefsError> {
        if let Some(prefs) = store.get::<ColumnPrefs>(&self.prefs_key()).await? {
            self.apply_prefs(prefs);
        }
        Ok(())
    }

    /// Persist the current column visibility/order to the prefs store.
    pub async fn save_prefs(&self, store: &PrefsStore) -> Result<(), PrefsError> {
        let prefs = self.column_prefs();
        store.set(&self.prefs_key(), &prefs).await
    }

    /// Snapshot the current column preferences.
    pub fn column_prefs(&self) -> ColumnPrefs {
        self.inner
            .read()
            .map(|g| ColumnPrefs {
                hidden: {
                    let mut hidden: Vec<String> = g.hidden.iter().cloned().collect();
                    hidden.sort();
                    hidden
                },
                order: g.order.clone(),
            })
            .unwrap_or_default()
    }

    /// Apply column preferences, ignoring unknown keys and visibility
    /// changes for non-hideable columns.
    pub fn apply_prefs(&self, prefs: ColumnPrefs) {
        if let Ok(mut guard) = self.inner.write() {
            let hidden: HashSet<String> = prefs
                .hidden
                .into_iter()
                .filter(|key| {
                    guard
                        .columns
                        .iter()
                        .any(|c| &c.key == key && c.hideable)
                })
                .collect();
            guard.hidden = hidden;
            self.dirty.store(true, Ordering::SeqCst);
        }
        if !prefs.order.is_empty() {
            self.set_column_order(prefs.order);
        }
    }

    fn prefs_key(&self) -> String {
        format!("table/{}/columns", self.storage_key)
    }

    // -------------------------------------------------------------------------
    // View
    // -------------------------------------------------------------------------

    /// Snapshot the table for rendering.
    pub fn view(&self) -> TableView {
        let Ok(guard) = self.inner.read() else {
            return TableView::default();
        };

        let columns = Self::visible_columns_inner(&guard);
        let headers = columns
            .iter()
            .map(|column| HeaderView {
                key: column.key.clone(),
                label: column.label.clone(),
                sortable: column.sortable,
                sort: match &guard.sort {
                    Some((key, direction)) if *key == column.key => Some(*direction),
                    _ => None,
                },
            })
            .collect();

        let rows = guard
            .rows
            .iter()
            .map(|row| {
                let id = row.id();
                RowView {
                    selected: guard.selection.is_selected(&id),
                    cells: columns.iter().map(|c| row.cell(&c.key)).collect(),
                    id,
                }
            })
            .collect::<Vec<_>>();

        let empty_message = (rows.is_empty() && !guard.loading)
            .then(|| guard.empty_message.clone());

        TableView {
            headers,
            rows,
            loading: guard.loading,
            empty_message,
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl<R: TableRow> Clone for Table<R> {
    fn clone(&self) -> Self {
        Self {
            storage_key: self.storage_key.clone(),
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

/// One header cell in a rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Column key.
    pub key: String,
    /// Header label.
    pub label: String,
    /// Whether the header responds to sort clicks.
    pub sortable: bool,
    /// Sort indicator to draw, if this column is sorted.
    pub sort: Option<Direction>,
}

/// One row in a rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Stable row id.
    pub id: String,
    /// Whether the row's checkbox is checked.
    pub selected: bool,
    /// Display text per visible column, in header order.
    pub cells: Vec<String>,
}

/// Snapshot of a table ready to draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    /// Visible column headers, in display order.
    pub headers: Vec<HeaderView>,
    /// Loaded rows.
    pub rows: Vec<RowView>,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Set only when there are no rows and nothing is loading.
    pub empty_message: Option<String>,
}

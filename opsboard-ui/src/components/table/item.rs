//! TableRow trait and Column type for table display.

/// Column configuration.
///
/// A column's `key` uniquely identifies it within its table; visibility
/// and ordering preferences are persisted against the key.
///
/// # Examples
///
/// ```
/// use opsboard_ui::Column;
///
/// let columns = vec![
///     Column::new("name", "Name").sortable(),
///     Column::new("id", "ID").locked(),
///     Column::new("created_at", "Created").hidden(),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Unique key within the table.
    pub key: String,
    /// Column header text.
    pub label: String,
    /// Whether clicking the header cycles the sort indicator.
    pub sortable: bool,
    /// Whether the column may be hidden.
    pub hideable: bool,
    /// Whether the column may be reordered away from its declared
    /// position.
    pub draggable: bool,
    /// Whether the column starts out visible.
    pub default_visible: bool,
}

impl Column {
    /// Create a new column.
    ///
    /// Defaults: not sortable, hideable, draggable, visible.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            hideable: true,
            draggable: true,
            default_visible: true,
        }
    }

    /// Make the column sortable.
    ///
    /// Sortable columns cycle their sort indicator on header clicks;
    /// the actual ordering is delegated to the data source.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Make the column non-hideable.
    pub fn locked(mut self) -> Self {
        self.hideable = false;
        self
    }

    /// Pin the column to its declared position.
    pub fn pinned(mut self) -> Self {
        self.draggable = false;
        self
    }

    /// Start the column hidden.
    pub fn hidden(mut self) -> Self {
        self.default_visible = false;
        self
    }
}

/// Trait for items that can be displayed as rows in a Table.
///
/// Implement this to define how your data renders: `id` supplies a
/// stable identity for selection, `cell` supplies display text per
/// column key.
///
/// # Example
///
/// ```ignore
/// impl TableRow for Vendor {
///     fn id(&self) -> String {
///         self.id.to_string()
///     }
///
///     fn cell(&self, column: &str) -> String {
///         match column {
///             "name" => self.name.clone(),
///             "region" => self.region.clone(),
///             _ => String::new(),
///         }
///     }
/// }
/// ```
pub trait TableRow: Clone + Send + Sync + 'static {
    /// Unique identifier for this row.
    ///
    /// Used for stable selection across row replacement.
    fn id(&self) -> String;

    /// Display text for the given column key.
    ///
    /// Unknown keys should render empty rather than panic.
    fn cell(&self, column: &str) -> String;
}

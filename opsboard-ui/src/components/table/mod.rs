//! Table component - column visibility, tri-state sort, and row selection.
//!
//! The Table is headless: it owns the state every list screen repeats
//! (which columns are visible, what the sort indicator shows, which
//! rows are checked) and produces [`TableView`] snapshots for the
//! embedding UI to draw. Row data comes from the list controller;
//! ordering is the server's job — the table only tracks indicator
//! state.
//!
//! # Example
//!
//! ```ignore
//! use opsboard_ui::{Column, Table, TableRow};
//!
//! let columns = vec![
//!     Column::new("name", "Name").sortable(),
//!     Column::new("region", "Region"),
//!     Column::new("updated_at", "Updated").hidden(),
//! ];
//! let table: Table<Record> = Table::new("vendors", columns);
//!
//! table.set_rows(page.items);
//! let view = table.view();
//! ```

mod item;
mod state;

pub use item::Column;
pub use item::TableRow;
pub use state::ColumnPrefs;
pub use state::Direction;
pub use state::HeaderView;
pub use state::RowView;
pub use state::Table;
pub use state::TableView;

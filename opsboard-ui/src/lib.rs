//! Headless list/table/pagination components for back-office screens.
//!
//! Every dashboard screen is the same machine: a paginated, filterable,
//! searchable table over a REST list endpoint. This crate implements
//! that machine once — a [`ListController`] driving fetches, a
//! [`Table`] holding column/selection/sort state, and a pagination
//! strip — so screens configure it instead of re-implementing it.
//!
//! The components are headless: they own state and produce view
//! snapshots; drawing them is the embedding UI's job.

pub mod components;
pub mod prefs;
pub mod source;

pub use components::controller::DataSource;
pub use components::controller::ListController;
pub use components::controller::SEARCH_DEBOUNCE;
pub use components::pagination::page_markers;
pub use components::pagination::PageMarker;
pub use components::pagination::PaginationView;
pub use components::selection::Selection;
pub use components::table::Column;
pub use components::table::Direction;
pub use components::table::Table;
pub use components::table::TableRow;
pub use components::table::TableView;

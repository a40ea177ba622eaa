//! List controller - fetch orchestration for paginated lists.
//!
//! The controller mediates between user intent (search keystrokes,
//! filter dialogs, page clicks) and the remote data source, exposing
//! `{items, page_info, loading, error}` to the renderers. Search input
//! is debounced; filter and page changes fetch immediately; every fetch
//! carries a generation so a stale response can never overwrite the
//! result of a newer one.
//!
//! # Example
//!
//! ```ignore
//! use opsboard_ui::ListController;
//! use opsboard_ui::source::RemoteSource;
//!
//! let source = RemoteSource::new(client, Endpoint::vendors());
//! let controller = ListController::new(source);
//! controller.refresh();
//!
//! controller.set_search_input("acme");   // fetches after the debounce
//! controller.set_page(2);
//! ```

mod state;

pub use state::DataSource;
pub use state::ListController;
pub use state::DEFAULT_PER_PAGE;
pub use state::SEARCH_DEBOUNCE;

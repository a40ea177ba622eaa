//! Components with self-managed state.
//!
//! Each component lives in its own module:
//! - `controller` - fetch orchestration for paginated lists
//! - `table` - column, selection, and sort state
//! - `pagination` - windowed page-number strip
//! - `selection` - shared id-based selection state

pub mod controller;
pub mod pagination;
pub mod selection;
pub mod table;

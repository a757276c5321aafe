//! Sort state parsing and toggling.

mod state;
mod toggle;

pub use state::{SortDirection, SortState, SortToken};

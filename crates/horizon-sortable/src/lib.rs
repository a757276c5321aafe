//! Sortable column links for server-rendered list views.
//!
//! This crate renders the anchor markup for sortable table headers,
//! featuring:
//!
//! - **Sort toggling**: each column cycles absent → ascending →
//!   descending → absent through a comma-separated `sort` query parameter
//! - **Multi-column sorts**: other columns keep their position and
//!   direction when one column is toggled
//! - **Query persistence**: remaining query parameters are carried into
//!   the generated link, with `sort` and `page` excluded
//! - **CSS annotation**: optional static, active, and direction classes
//!   plus a per-column direction icon
//! - **Relation-qualified columns**: `"author.name"` style specifiers with
//!   a configurable separator
//!
//! # Example
//!
//! ```ignore
//! use horizon_sortable::prelude::*;
//!
//! // Resolve a configuration once, at application startup
//! let renderer = SortLinkRenderer::new(SortLinkConfig::default());
//!
//! // Per request: capture the current path and query string
//! let ctx = QueryContext::parse("/contacts", "sort=name&filter=active");
//!
//! // Per column header: render the toggle link
//! let html = renderer.render(&SortLink::new("name").title("Name"), &ctx)?;
//! ```

pub mod column;
pub mod config;
pub mod query;
pub mod render;
pub mod sort;
pub mod title;

mod error;

pub use error::{Error, Result};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::column::ColumnSpec;
    pub use crate::config::{IconRule, SortLinkConfig, TitleFormatter};
    pub use crate::query::{QueryContext, QueryValue};
    pub use crate::render::{RenderedLink, SortLink, SortLinkRenderer};
    pub use crate::sort::{SortDirection, SortState, SortToken};
    pub use crate::title::{LinkTitle, resolve_title};
    pub use crate::{Error, Result};
}

//! HTML assembly for sort links.

mod classes;
mod escape;
mod icon;
mod renderer;

pub use renderer::{RenderedLink, SortLink, SortLinkRenderer};

//! Markdown section navigation over a ctags index.
//!
//! The index is read once per run into a [`TagIndex`] for one target file.
//! From there, [`bounds::resolve_bounds`] finds the line range a heading owns
//! and [`tree`] rebuilds the heading outline from order and level alone;
//! [`listing`] gives the same headings as a flat list with their ranges.

pub mod bounds;
pub mod cli;
pub mod error;
pub mod filter;
pub mod listing;
pub mod logging;
pub mod reader;
pub mod report;
pub mod tree;
pub mod types;

pub use crate::bounds::{SectionBounds, resolve_bounds};
pub use crate::error::Error;
pub use crate::reader::TagIndex;
pub use crate::types::{HeadingKind, TagRecord};

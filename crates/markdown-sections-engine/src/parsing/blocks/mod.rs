//! # Block Tree Builder
//!
//! Splits a scope's lines at headings and reduces the flat, leveled outline
//! to a forest: pop ancestors whose level is at least the new heading's,
//! then attach under whatever remains on the stack.

pub mod builder;
pub mod content;

pub use builder::BlockTreeBuilder;
pub use content::join_lines;

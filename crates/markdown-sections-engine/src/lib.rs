//! # markdown-sections engine
//!
//! Parses markdown annotated with `<!-- ... -->` marker comments into an
//! immutable tree of sections, subsections, heading blocks, typed elements
//! and named fields. See [`Document::parse`].

pub mod error;
pub mod io;
pub mod options;
pub mod parsing;
pub mod render;
pub mod snapshot;
pub mod tree;

pub use error::ParseError;
pub use options::ParseOptions;
pub use render::{CmarkRenderer, HtmlRenderer, plain_text};
pub use tree::*;

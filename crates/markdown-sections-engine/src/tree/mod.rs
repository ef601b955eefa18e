//! # Content Tree
//!
//! The immutable parse output. Every scope offers positional access (ordered
//! lists), named access (first occurrence wins) and aggregate element
//! collections through [`ContentScope`].

pub mod block;
pub mod collection;
pub mod document;
pub mod element;
pub mod field;
pub mod names;
pub mod section;

pub use block::Block;
pub use collection::{ContentScope, ElementCollection};
pub use document::Document;
pub use element::{Element, ElementKind, ListItem};
pub use field::{Field, FieldItem, FieldKind, FieldType, FieldValue};
pub use names::NameIndex;
pub use section::{Section, Subsection};

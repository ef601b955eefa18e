//! Line-level syntax kinds, each owning its delimiters.

pub mod code_fence;
pub mod heading;
pub mod marker;

pub use code_fence::{CodeFence, FenceSig};
pub use heading::AtxHeading;
pub use marker::{CommentMarker, Marker};

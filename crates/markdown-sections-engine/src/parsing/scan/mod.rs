//! # Marker Scanner
//!
//! Turns the body into an ordered sequence of classified lines: comment
//! markers, ATX headings, blank lines and plain content, with fenced code
//! treated as a raw zone.

pub mod classify;
pub mod kinds;

pub use classify::{Line, LineKind, LineScanner, scan};
pub use kinds::Marker;

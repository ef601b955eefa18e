use std::str::Utf8Error;

/// The only failures the parser reports.
///
/// Everything else (orphan closers, unclosed constructs, duplicate names,
/// malformed headers) is resolved by default policies and never surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("document is not valid UTF-8: {0}")]
    Input(#[from] Utf8Error),
    #[error("nesting depth {depth} exceeds the structural limit of {limit}")]
    Structure { depth: usize, limit: usize },
}

//! # Snapshot Support
//!
//! - **`outline`**: a stable, line-oriented rendering of a parsed document,
//!   used by `insta` snapshots and the CLI.
//! - **`invariants`**: runtime checks over a finished tree (heading levels
//!   strictly increase downwards, block spans stay inside the body).

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::render_outline;

//! # Snapshot testing support
//!
//! - **`outline`**: renders a token tree as indented text, one token per
//!   line, for `insta` snapshots and readable test failures.
//! - **`invariants`**: assertions that the tree accounts for every byte of
//!   its input (see [`invariants::check`]).

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::{Outline, outline};

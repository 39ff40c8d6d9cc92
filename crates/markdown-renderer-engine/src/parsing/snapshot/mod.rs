//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a parsed `Document` to a stable indented
//!   outline for `insta` snapshot testing (also the CLI `--tree` view)
//! - **`invariants`**: Runtime checks for parser correctness (header levels
//!   in range, no empty plain runs, non-empty lists)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;

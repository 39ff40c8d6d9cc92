//! # Block Parsing
//!
//! Two-phase block parsing over whole-document text.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split on blank lines into
//!    trimmed block candidates
//!
//! 2. **Classification** (`open`, `builder`): each candidate is matched
//!    against the block kinds in fixed precedence order, its syntax stripped,
//!    and its payload inline parsed into a `Block`
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `Item`, `Table`)
//! - **`kinds`**: Block-specific types with owned markers
//! - **`segment`**: `split_blocks` candidate splitter
//! - **`open`**: `try_open` precedence dispatch producing `BlockOpen`
//! - **`builder`**: `classify_block` / `build_block` construction
//!
//! ## Key Invariants
//!
//! - Every candidate classifies; there is no error path
//! - Code blocks are raw zones: no inline parsing inside
//! - Candidates are independent; no state carries between blocks

pub mod builder;
pub mod kinds;
pub mod open;
pub mod segment;
pub mod types;

pub use builder::{build_block, classify_block};
pub use open::{BlockOpen, try_open};
pub use segment::{BLOCK_DELIMITER, split_blocks};
pub use types::{Block, Cell, Item, Table};

//! # Inline Parsing
//!
//! Turns the stripped text payload of a block into typed [`Node`]s.
//!
//! ## Architecture
//!
//! Inline parsing runs as ordered passes over a node sequence. Every pass
//! rewrites only the nodes that are still `Plain`, so anything an earlier
//! pass typed is terminal:
//!
//! 1. **Images** (`extract`): `![alt](source)`
//! 2. **Hyperlinks** (`extract`): `[text](target)`
//! 3. **Emphasis** (`tokenizer`): delimiter state machine
//!
//! Alt text and link text are parsed recursively through the same pipeline.
//!
//! ## Modules
//!
//! - **`types`**: `Node` enum
//! - **`kinds`**: delimiter table and extraction patterns
//! - **`cursor`**: `Cursor` for char-by-char scanning
//! - **`tokenizer`**: `tokenize()` emphasis scanner
//! - **`extract`**: regex-driven structural extractors
//! - **`parser`**: `parse_inline()` pipeline entry point

pub mod cursor;
pub mod extract;
pub mod kinds;
pub mod parser;
pub mod tokenizer;
pub mod types;

pub use parser::{parse_inline, parse_nodes};
pub use tokenizer::tokenize;
pub use types::Node;

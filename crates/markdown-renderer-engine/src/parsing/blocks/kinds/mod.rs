//! # Block Kinds
//!
//! Block-specific types that own their syntax. Each kind knows its markers
//! and how to strip them; the precedence between kinds lives in `open`.
//!
//! ## Types
//!
//! - **`Heading`**: `#` run plus a space, levels 1-6
//! - **`ThematicBreak`**: exactly `---`
//! - **`CodeFence`**: ```` ``` ```` at both ends
//! - **`BlockQuote`**: `> `, two spaces or a tab on every line
//! - **`OrderedList`**: `1. ` or the line's own position on every line
//! - **`UnorderedList`**: `* ` or `- ` on every line
//! - **`Table`**: reserved, never matches

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod table;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use list::{OrderedList, UnorderedList};
pub use thematic_break::ThematicBreak;

//! # Inline Kinds
//!
//! Inline-specific types that own their syntax: every delimiter token and
//! extraction pattern lives here, never hardcoded in scanner code.
//!
//! ## Types
//!
//! - **`Emphasis`** / **`DELIMITERS`**: the token table driving the tokenizer
//! - **`Image`**: `![alt](source)` pattern
//! - **`Hyperlink`**: `[text](target)` pattern

pub mod emphasis;
pub mod hyperlink;
pub mod image;

pub use emphasis::{DELIMITERS, Delimiter, Emphasis};
pub use hyperlink::Hyperlink;
pub use image::Image;

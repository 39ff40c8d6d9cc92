pub mod io;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::{Document, blocks::Block, inline::Node, parse_document};
pub use render::{markdown_to_html, render_document};

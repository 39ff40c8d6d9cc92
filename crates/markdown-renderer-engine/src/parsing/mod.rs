pub mod blocks;
pub mod inline;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{Block, classify_block, split_blocks};

/// A parsed document: its blocks in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    /// Indented one-node-per-line view of the tree.
    #[must_use]
    pub fn outline(&self) -> String {
        snapshot::normalize(self)
    }
}

/// Parses document text into a [`Document`].
///
/// The text is split into block candidates, then each candidate is
/// classified and inline parsed independently.
pub fn parse_document(text: &str) -> Document {
    let blocks: Vec<Block> = split_blocks(text)
        .iter()
        .map(|candidate| classify_block(candidate))
        .collect();
    log::debug!("parsed document into {} blocks", blocks.len());
    Document { blocks }
}

use crate::parsing::inline::parse_inline;

use super::{
    open::{BlockOpen, try_open},
    types::{Block, Item, Table},
};

/// Classifies a block candidate and builds its [`Block`].
///
/// Total: malformed markers fall through to less specific kinds and finally
/// to a paragraph.
pub fn classify_block(candidate: &str) -> Block {
    let block = build_block(try_open(candidate));
    log::trace!("classified block as {}", block.kind());
    block
}

/// Builds a [`Block`] from a classified candidate, inline parsing its
/// payload. Code stays raw.
pub fn build_block(open: BlockOpen<'_>) -> Block {
    match open {
        BlockOpen::Header { level, text } => Block::Header {
            content: parse_inline(text),
            level,
        },
        BlockOpen::Break => Block::Break,
        BlockOpen::Code { text } => Block::Code(text.to_owned()),
        BlockOpen::Quote { text } => Block::Quote(parse_inline(&text)),
        BlockOpen::OrderedList { items } => Block::OrderedList(parse_items(&items)),
        BlockOpen::UnorderedList { items } => Block::UnorderedList(parse_items(&items)),
        BlockOpen::Table => Block::Table(Table::default()),
        BlockOpen::Paragraph { text } => Block::Paragraph(parse_inline(text)),
    }
}

/// Each item is parsed on its own.
fn parse_items(items: &[&str]) -> Vec<Item> {
    items.iter().map(|item| parse_inline(item)).collect()
}

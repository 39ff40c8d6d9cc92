use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, ThematicBreak, UnorderedList},
    types::Table,
};

/// The kind a block candidate opens, with its syntax already stripped.
///
/// Payloads still need inline parsing; `build_block` does that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen<'a> {
    Header { level: u8, text: &'a str },
    Break,
    Code { text: &'a str },
    Quote { text: String },
    OrderedList { items: Vec<&'a str> },
    UnorderedList { items: Vec<&'a str> },
    Table,
    Paragraph { text: &'a str },
}

/// Classifies one block candidate.
///
/// Kinds are tried in strict precedence order and the first match wins:
/// header, break, code, quote, ordered list, unordered list, table. Anything
/// left over is a paragraph, so every candidate classifies.
pub fn try_open(candidate: &str) -> BlockOpen<'_> {
    if let Some(level) = Heading::level(candidate) {
        return BlockOpen::Header {
            level,
            text: Heading::strip(candidate, level),
        };
    }
    if ThematicBreak::matches(candidate) {
        return BlockOpen::Break;
    }
    if CodeFence::matches(candidate) {
        return BlockOpen::Code {
            text: CodeFence::strip(candidate),
        };
    }
    if let Some(prefix) = BlockQuote::prefix(candidate) {
        return BlockOpen::Quote {
            text: BlockQuote::strip(candidate, prefix),
        };
    }
    if let Some(items) = OrderedList::items(candidate) {
        return BlockOpen::OrderedList { items };
    }
    if let Some(items) = UnorderedList::items(candidate) {
        return BlockOpen::UnorderedList { items };
    }
    if Table::matches(candidate) {
        return BlockOpen::Table;
    }
    BlockOpen::Paragraph { text: candidate }
}

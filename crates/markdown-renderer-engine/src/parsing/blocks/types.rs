use crate::parsing::inline::Node;

/// One entry of an ordered or unordered list.
pub type Item = Vec<Node>;

/// One table cell.
pub type Cell = Vec<Node>;

/// A table: a header row and data rows.
///
/// Tables are not recognised by the classifier yet; the type exists so
/// renderers handle the variant exhaustively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<Cell>,
    pub rows: Vec<Vec<Cell>>,
}

/// A top-level block of a document.
///
/// Content is always the inline-parsed payload with block syntax stripped.
/// `Code` is the one raw variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `# Title` through `###### Title`.
    Header {
        content: Vec<Node>,
        /// 1 to 6.
        level: u8,
    },
    /// Fallback for anything no other kind claims.
    Paragraph(Vec<Node>),
    /// Fenced code with the fences stripped. Never inline parsed.
    Code(String),
    /// Quote payload, parsed as one multi-line string.
    Quote(Vec<Node>),
    /// `---` divider.
    Break,
    OrderedList(Vec<Item>),
    UnorderedList(Vec<Item>),
    Table(Table),
}

impl Block {
    /// Short variant name, as used by outlines and logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Header { .. } => "Header",
            Block::Paragraph(_) => "Paragraph",
            Block::Code(_) => "Code",
            Block::Quote(_) => "Quote",
            Block::Break => "Break",
            Block::OrderedList(_) => "OrderedList",
            Block::UnorderedList(_) => "UnorderedList",
            Block::Table(_) => "Table",
        }
    }
}

use crate::parsing::{
    Document,
    blocks::{Block, kinds::Heading},
    inline::Node,
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Header levels are within 1 to 6
/// - Lists carry at least one item
/// - No `Plain` node is empty, including inside link and image content
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    for (i, block) in doc.blocks.iter().enumerate() {
        match block {
            Block::Header { content, level } => {
                assert!(
                    (1..=Heading::MAX_LEVEL).contains(level),
                    "block {i}: header level out of range: {level}"
                );
                check_nodes(i, content);
            }
            Block::Paragraph(content) | Block::Quote(content) => check_nodes(i, content),
            Block::OrderedList(items) | Block::UnorderedList(items) => {
                assert!(!items.is_empty(), "block {i}: list without items");
                for item in items {
                    check_nodes(i, item);
                }
            }
            Block::Table(table) => {
                for cell in table.header.iter().chain(table.rows.iter().flatten()) {
                    check_nodes(i, cell);
                }
            }
            Block::Code(_) | Block::Break => {}
        }
    }
}

fn check_nodes(block: usize, nodes: &[Node]) {
    for node in nodes {
        match node {
            Node::Plain(text) => {
                assert!(!text.is_empty(), "block {block}: empty plain node");
            }
            Node::Hyperlink { content, .. } | Node::Image { content, .. } => {
                check_nodes(block, content);
            }
            _ => {}
        }
    }
}

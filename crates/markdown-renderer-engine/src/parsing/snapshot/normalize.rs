use crate::parsing::{
    Document,
    blocks::{Block, Cell},
    inline::Node,
};

const INDENT: &str = "  ";

/// Converts a document into an indented outline, one node per line.
///
/// Leaf text is escaped so line breaks inside a node stay on one line:
///
/// ```text
/// Header(1)
///   Plain(Title)
/// UnorderedList
///   Item
///     Bold(a)
/// ```
pub fn normalize(doc: &Document) -> String {
    let mut lines = vec![];
    for block in &doc.blocks {
        block_lines(block, 0, &mut lines);
    }
    lines.join("\n")
}

fn push(lines: &mut Vec<String>, depth: usize, line: impl AsRef<str>) {
    lines.push(format!("{}{}", INDENT.repeat(depth), line.as_ref()));
}

fn block_lines(block: &Block, depth: usize, lines: &mut Vec<String>) {
    match block {
        Block::Header { content, level } => {
            push(lines, depth, format!("Header({level})"));
            nodes_lines(content, depth + 1, lines);
        }
        Block::Paragraph(content) | Block::Quote(content) => {
            push(lines, depth, block.kind());
            nodes_lines(content, depth + 1, lines);
        }
        Block::Code(text) => push(lines, depth, format!("Code({})", text.escape_debug())),
        Block::Break => push(lines, depth, block.kind()),
        Block::OrderedList(items) | Block::UnorderedList(items) => {
            push(lines, depth, block.kind());
            for item in items {
                push(lines, depth + 1, "Item");
                nodes_lines(item, depth + 2, lines);
            }
        }
        Block::Table(table) => {
            push(lines, depth, block.kind());
            row_lines(&table.header, depth + 1, lines);
            for row in &table.rows {
                row_lines(row, depth + 1, lines);
            }
        }
    }
}

fn row_lines(row: &[Cell], depth: usize, lines: &mut Vec<String>) {
    push(lines, depth, "Row");
    for cell in row {
        push(lines, depth + 1, "Cell");
        nodes_lines(cell, depth + 2, lines);
    }
}

fn nodes_lines(nodes: &[Node], depth: usize, lines: &mut Vec<String>) {
    for node in nodes {
        match node {
            Node::Hyperlink { content, target } => {
                push(lines, depth, format!("Hyperlink({target})"));
                nodes_lines(content, depth + 1, lines);
            }
            Node::Image { content, source } => {
                push(lines, depth, format!("Image({source})"));
                nodes_lines(content, depth + 1, lines);
            }
            leaf => push(
                lines,
                depth,
                format!(
                    "{}({})",
                    leaf.kind(),
                    leaf.text().unwrap_or_default().escape_debug()
                ),
            ),
        }
    }
}

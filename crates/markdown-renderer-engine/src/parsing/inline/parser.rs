use super::{
    extract::{expand_plain, extract_hyperlinks, extract_images},
    tokenizer::tokenize,
    types::Node,
};

/// Parses raw inline text into a sequence of [`Node`]s.
///
/// # Pass Order
/// 1. Images, before hyperlinks: the hyperlink pattern also matches the
///    bracketed part of an image.
/// 2. Hyperlinks.
/// 3. Emphasis, last: `*`, `_` or `-` inside a URL or an extracted node is
///    never taken for a delimiter.
///
/// Each pass only rewrites nodes that are still `Plain`.
pub fn parse_inline(s: &str) -> Vec<Node> {
    parse_nodes(vec![Node::Plain(s.to_owned())])
}

/// Runs the inline passes over an existing node sequence.
///
/// Already-typed nodes pass through untouched; `Plain` nodes are expanded.
pub fn parse_nodes(nodes: Vec<Node>) -> Vec<Node> {
    let nodes = expand_plain(nodes, extract_images);
    let nodes = expand_plain(nodes, extract_hyperlinks);
    expand_plain(nodes, tokenize)
}

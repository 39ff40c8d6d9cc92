use regex::Regex;

use super::{
    kinds::{Hyperlink, Image},
    parser::parse_inline,
    types::Node,
};

/// Extracts every `![alt](source)` in `s` into [`Node::Image`].
///
/// Alt text goes back through [`parse_inline`], so emphasis and links inside
/// it are resolved. Text around matches is kept as `Plain`.
pub fn extract_images(s: &str) -> Vec<Node> {
    extract(s, Image::pattern(), |content, source| Node::Image {
        content,
        source,
    })
}

/// Extracts every `[text](target)` in `s` into [`Node::Hyperlink`].
pub fn extract_hyperlinks(s: &str) -> Vec<Node> {
    extract(s, Hyperlink::pattern(), |content, target| Node::Hyperlink {
        content,
        target,
    })
}

/// Applies `f` to every `Plain` node, splicing its output in place.
///
/// Non-plain nodes pass through untouched.
pub fn expand_plain(nodes: Vec<Node>, f: impl Fn(&str) -> Vec<Node>) -> Vec<Node> {
    nodes
        .into_iter()
        .flat_map(|node| match node {
            Node::Plain(text) => f(&text),
            other => vec![other],
        })
        .collect()
}

fn extract(s: &str, pattern: &Regex, build: impl Fn(Vec<Node>, String) -> Node) -> Vec<Node> {
    let mut out = vec![];
    let mut last = 0;

    for caps in pattern.captures_iter(s) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let (_, [content, location]) = caps.extract();

        push_gap(&mut out, &s[last..whole.start()]);
        out.push(build(parse_inline(content), location.to_owned()));
        last = whole.end();
    }

    push_gap(&mut out, &s[last..]);
    out
}

/// Text between matches; zero-length gaps are omitted.
fn push_gap(out: &mut Vec<Node>, text: &str) {
    if !text.is_empty() {
        out.push(Node::Plain(text.to_owned()));
    }
}

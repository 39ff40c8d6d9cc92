//! # Rendering
//!
//! Converts a parsed [`Document`] into an [`HtmlNode`] tree, then serializes
//! it. One [`ToHtml`] case per node and block variant; the whole document is
//! wrapped in a single `<div>`, even when empty.

pub mod html;

pub use html::HtmlNode;

use crate::parsing::{
    Document,
    blocks::{Block, Cell, Item, Table},
    inline::Node,
    parse_document,
};

/// Conversion into the HTML output tree.
pub trait ToHtml {
    fn to_html(&self) -> HtmlNode;
}

/// Renders a parsed document to an HTML string.
pub fn render_document(doc: &Document) -> String {
    doc.to_html().to_string()
}

/// Full pipeline: document text to HTML string.
pub fn markdown_to_html(text: &str) -> String {
    render_document(&parse_document(text))
}

fn children<T: ToHtml>(items: &[T]) -> Vec<HtmlNode> {
    items.iter().map(ToHtml::to_html).collect()
}

fn list(tag: &str, items: &[Item]) -> HtmlNode {
    let entries = items
        .iter()
        .map(|item| HtmlNode::element("li", children(item)))
        .collect();
    HtmlNode::element(tag, entries)
}

fn table_row(cell_tag: &str, row: &[Cell]) -> HtmlNode {
    let cells = row
        .iter()
        .map(|cell| HtmlNode::element(cell_tag, children(cell)))
        .collect();
    HtmlNode::element("tr", cells)
}

impl ToHtml for Node {
    fn to_html(&self) -> HtmlNode {
        match self {
            Node::Plain(text) => HtmlNode::text(text.as_str()),
            Node::Bold(text) => HtmlNode::element("b", vec![HtmlNode::text(text.as_str())]),
            Node::Italic(text) => HtmlNode::element("i", vec![HtmlNode::text(text.as_str())]),
            Node::Underline(text) => HtmlNode::element("u", vec![HtmlNode::text(text.as_str())]),
            Node::InlineCode(text) => {
                HtmlNode::element("code", vec![HtmlNode::text(text.as_str())])
            }
            Node::Crossed(text) => {
                HtmlNode::element("strike", vec![HtmlNode::text(text.as_str())])
            }
            Node::Hyperlink { content, target } => {
                HtmlNode::element("a", children(content)).with_attr("href", target.as_str())
            }
            Node::Image { content, source } => {
                HtmlNode::element("img", children(content)).with_attr("src", source.as_str())
            }
        }
    }
}

impl ToHtml for Table {
    fn to_html(&self) -> HtmlNode {
        let rows = std::iter::once(table_row("th", &self.header))
            .chain(self.rows.iter().map(|row| table_row("td", row)))
            .collect();
        HtmlNode::element("table", rows)
    }
}

impl ToHtml for Block {
    fn to_html(&self) -> HtmlNode {
        match self {
            Block::Header { content, level } => {
                HtmlNode::element(format!("h{level}"), children(content))
            }
            Block::Paragraph(content) => HtmlNode::element("p", children(content)),
            Block::Code(text) => HtmlNode::element(
                "pre",
                vec![HtmlNode::element("code", vec![HtmlNode::text(text.as_str())])],
            ),
            Block::Quote(content) => HtmlNode::element("blockquote", children(content)),
            Block::Break => HtmlNode::void("hr"),
            Block::OrderedList(items) => list("ol", items),
            Block::UnorderedList(items) => list("ul", items),
            Block::Table(table) => table.to_html(),
        }
    }
}

impl ToHtml for Document {
    fn to_html(&self) -> HtmlNode {
        HtmlNode::element("div", children(&self.blocks))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn p(s: &str) -> Node {
        Node::Plain(s.to_owned())
    }

    fn html<T: ToHtml>(value: &T) -> String {
        value.to_html().to_string()
    }

    #[test]
    fn leaf_nodes() {
        assert_eq!(html(&p("a & b")), "a & b");
        assert_eq!(html(&Node::Bold("bold".into())), "<b>bold</b>");
        assert_eq!(html(&Node::Italic("italic".into())), "<i>italic</i>");
        assert_eq!(html(&Node::Underline("u".into())), "<u>u</u>");
        assert_eq!(html(&Node::InlineCode("code".into())), "<code>code</code>");
        assert_eq!(html(&Node::Crossed("x".into())), "<strike>x</strike>");
        assert_eq!(html(&Node::Bold(String::new())), "<b></b>");
    }

    #[test]
    fn hyperlink() {
        let link = Node::Hyperlink {
            content: vec![Node::Bold("bold".into())],
            target: "url.com".into(),
        };
        assert_eq!(html(&link), "<a href='url.com'><b>bold</b></a>");
    }

    #[test]
    fn image_content_is_the_body() {
        let image = Node::Image {
            content: vec![p("logo")],
            source: "https://example.com/logo.png".into(),
        };
        assert_eq!(
            html(&image),
            "<img src='https://example.com/logo.png'>logo</img>"
        );
        let empty = Node::Image {
            content: vec![],
            source: "img.png".into(),
        };
        assert_eq!(html(&empty), "<img src='img.png'></img>");
    }

    #[test]
    fn blocks() {
        let header = Block::Header {
            content: vec![p("Subtitle")],
            level: 3,
        };
        assert_eq!(html(&header), "<h3>Subtitle</h3>");
        assert_eq!(html(&Block::Paragraph(vec![])), "<p></p>");
        assert_eq!(html(&Block::Break), "<hr/>");
        assert_eq!(
            html(&Block::Quote(vec![p("hello "), Node::Bold("bold".into())])),
            "<blockquote>hello <b>bold</b></blockquote>"
        );
    }

    #[test]
    fn code_is_literal() {
        assert_eq!(
            html(&Block::Code("line1\n**line2**".into())),
            "<pre><code>line1\n**line2**</code></pre>"
        );
        assert_eq!(html(&Block::Code(String::new())), "<pre><code></code></pre>");
    }

    #[test]
    fn lists() {
        let items = vec![vec![Node::Bold("bold".into()), p(" item")], vec![p("second")]];
        assert_eq!(
            html(&Block::OrderedList(items.clone())),
            "<ol><li><b>bold</b> item</li><li>second</li></ol>"
        );
        assert_eq!(
            html(&Block::UnorderedList(items)),
            "<ul><li><b>bold</b> item</li><li>second</li></ul>"
        );
        assert_eq!(html(&Block::UnorderedList(vec![])), "<ul></ul>");
    }

    #[test]
    fn table() {
        let table = Table {
            header: vec![vec![p("a")], vec![p("b")]],
            rows: vec![vec![vec![p("1")], vec![Node::Italic("2".into())]]],
        };
        assert_eq!(
            html(&Block::Table(table)),
            "<table><tr><th>a</th><th>b</th></tr><tr><td>1</td><td><i>2</i></td></tr></table>"
        );
    }

    #[test]
    fn empty_document_is_an_empty_container() {
        assert_eq!(render_document(&Document::default()), "<div></div>");
        assert_eq!(markdown_to_html(""), "<div></div>");
    }

    #[test]
    fn document_wraps_blocks_in_order() {
        let doc = Document {
            blocks: vec![Block::Paragraph(vec![p("one")]), Block::Paragraph(vec![p("two")])],
        };
        assert_eq!(render_document(&doc), "<div><p>one</p><p>two</p></div>");
    }
}

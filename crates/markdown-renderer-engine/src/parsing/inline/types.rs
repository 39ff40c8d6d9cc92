use std::fmt;

/// A parsed inline node.
///
/// Leaf variants own their text with delimiters already stripped. Structural
/// variants (`Hyperlink`, `Image`) own a fully parsed child sequence, so
/// emphasis inside link text or alt text is resolved recursively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Text that isn't part of any special construct.
    Plain(String),
    /// `**bold**` or `__bold__`.
    Bold(String),
    /// `*italic*` or `_italic_`.
    Italic(String),
    /// `~underline~`.
    Underline(String),
    /// `` `code` ``. Rendered literally.
    InlineCode(String),
    /// `-crossed-`.
    Crossed(String),
    /// `[content](target)`.
    Hyperlink {
        /// Parsed link text.
        content: Vec<Node>,
        /// Link destination, verbatim.
        target: String,
    },
    /// `![content](source)`.
    Image {
        /// Parsed alt text.
        content: Vec<Node>,
        /// Image location, verbatim.
        source: String,
    },
}

impl Node {
    /// Short variant name, as used by the debug notation and outlines.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Plain(_) => "Plain",
            Node::Bold(_) => "Bold",
            Node::Italic(_) => "Italic",
            Node::Underline(_) => "Underline",
            Node::InlineCode(_) => "InlineCode",
            Node::Crossed(_) => "Crossed",
            Node::Hyperlink { .. } => "Hyperlink",
            Node::Image { .. } => "Image",
        }
    }

    /// The text of a leaf node, `None` for structural nodes.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Node::Plain(t)
            | Node::Bold(t)
            | Node::Italic(t)
            | Node::Underline(t)
            | Node::InlineCode(t)
            | Node::Crossed(t) => Some(t),
            Node::Hyperlink { .. } | Node::Image { .. } => None,
        }
    }
}

/// Debug notation: `Plain(text)`, `Hyperlink([Plain(text)], target)`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Hyperlink { content, target } => {
                write!(f, "Hyperlink([{}], {target})", DisplayNodes(content))
            }
            Node::Image { content, source } => {
                write!(f, "Image([{}], {source})", DisplayNodes(content))
            }
            leaf => write!(f, "{}({})", leaf.kind(), leaf.text().unwrap_or_default()),
        }
    }
}

/// Comma-separated notation for a node sequence.
pub struct DisplayNodes<'a>(pub &'a [Node]);

impl fmt::Display for DisplayNodes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_notation() {
        assert_eq!(Node::Plain("hello".into()).to_string(), "Plain(hello)");
        assert_eq!(Node::Crossed("x".into()).to_string(), "Crossed(x)");
    }

    #[test]
    fn structural_notation() {
        let link = Node::Hyperlink {
            content: vec![Node::Bold("a".into()), Node::Plain(" b".into())],
            target: "url.com".into(),
        };
        assert_eq!(link.to_string(), "Hyperlink([Bold(a), Plain( b)], url.com)");
    }
}

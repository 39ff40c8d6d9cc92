use std::fmt;

/// An HTML output tree.
///
/// Text is written verbatim: there is no escaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlNode {
    /// Raw text.
    Text(String),
    /// `<tag attr='value'>children</tag>`.
    Element {
        tag: String,
        attrs: Vec<(&'static str, String)>,
        children: Vec<HtmlNode>,
    },
    /// Self-closing `<tag/>`.
    Void { tag: String },
}

impl HtmlNode {
    pub fn text(text: impl Into<String>) -> Self {
        HtmlNode::Text(text.into())
    }

    pub fn element(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        HtmlNode::Element {
            tag: tag.into(),
            attrs: vec![],
            children,
        }
    }

    pub fn void(tag: impl Into<String>) -> Self {
        HtmlNode::Void { tag: tag.into() }
    }

    /// Adds an attribute. No-op on text and void nodes.
    #[must_use]
    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        if let HtmlNode::Element { attrs, .. } = &mut self {
            attrs.push((name, value.into()));
        }
        self
    }
}

impl fmt::Display for HtmlNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HtmlNode::Text(text) => f.write_str(text),
            HtmlNode::Element {
                tag,
                attrs,
                children,
            } => {
                write!(f, "<{tag}")?;
                for (name, value) in attrs {
                    write!(f, " {name}='{value}'")?;
                }
                f.write_str(">")?;
                for child in children {
                    write!(f, "{child}")?;
                }
                write!(f, "</{tag}>")
            }
            HtmlNode::Void { tag } => write!(f, "<{tag}/>"),
        }
    }
}

use crate::parsing::inline::types::Node;

/// The emphasis style a delimiter token opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Bold,
    Italic,
    Underline,
    InlineCode,
    Crossed,
}

impl Emphasis {
    /// Wraps span text into the node for this style.
    pub fn wrap(self, text: &str) -> Node {
        let text = text.to_owned();
        match self {
            Emphasis::Bold => Node::Bold(text),
            Emphasis::Italic => Node::Italic(text),
            Emphasis::Underline => Node::Underline(text),
            Emphasis::InlineCode => Node::InlineCode(text),
            Emphasis::Crossed => Node::Crossed(text),
        }
    }
}

/// A delimiter token and the style it opens and closes.
#[derive(Debug, PartialEq, Eq)]
pub struct Delimiter {
    pub token: &'static str,
    pub emphasis: Emphasis,
}

/// Every emphasis delimiter, in match priority order.
///
/// Two-character tokens precede the single-character tokens sharing their
/// first character, so `**` is bold rather than two italic openers.
pub static DELIMITERS: [Delimiter; 7] = [
    Delimiter {
        token: "**",
        emphasis: Emphasis::Bold,
    },
    Delimiter {
        token: "__",
        emphasis: Emphasis::Bold,
    },
    Delimiter {
        token: "*",
        emphasis: Emphasis::Italic,
    },
    Delimiter {
        token: "_",
        emphasis: Emphasis::Italic,
    },
    Delimiter {
        token: "~",
        emphasis: Emphasis::Underline,
    },
    Delimiter {
        token: "`",
        emphasis: Emphasis::InlineCode,
    },
    Delimiter {
        token: "-",
        emphasis: Emphasis::Crossed,
    },
];

impl Delimiter {
    /// Finds the highest-priority delimiter at the start of `window`.
    pub fn at(window: &str) -> Option<&'static Delimiter> {
        DELIMITERS.iter().find(|d| window.starts_with(d.token))
    }
}

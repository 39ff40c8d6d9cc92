use std::sync::LazyLock;

use regex::Regex;

/// Hyperlink inline type with its owned extraction pattern.
pub struct Hyperlink;

impl Hyperlink {
    /// `[text](target)`; group 1 is the link text, group 2 the target.
    ///
    /// This also matches the bracketed tail of an image, so images must be
    /// extracted first.
    pub fn pattern() -> &'static Regex {
        static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"\[(.*?)\]\((.*?)\)").expect("hyperlink pattern is valid")
        });
        &PATTERN
    }
}

use std::sync::LazyLock;

use regex::Regex;

/// Image inline type with its owned extraction pattern.
pub struct Image;

impl Image {
    /// `![alt](source)`; group 1 is the alt text, group 2 the source.
    pub fn pattern() -> &'static Regex {
        static PATTERN: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("image pattern is valid"));
        &PATTERN
    }
}

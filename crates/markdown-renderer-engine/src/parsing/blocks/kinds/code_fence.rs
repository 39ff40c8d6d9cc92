/// Fenced code block type with its owned fence token.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";
    /// The fence character.
    pub const MARKER: char = '`';

    /// True when the candidate both starts and ends with a fence.
    ///
    /// The two checks are independent, so a lone ```` ``` ```` or six
    /// backticks count as an empty block.
    pub fn matches(candidate: &str) -> bool {
        candidate.starts_with(Self::FENCE) && candidate.ends_with(Self::FENCE)
    }

    /// Trims every leading and trailing backtick.
    ///
    /// Longer fences strip whole; the language tag line is part of the
    /// content.
    pub fn strip(candidate: &str) -> &str {
        candidate.trim_matches(Self::MARKER)
    }
}

/// Thematic break block type with its owned token.
pub struct ThematicBreak;

impl ThematicBreak {
    /// The only accepted break spelling.
    pub const TOKEN: &'static str = "---";

    pub fn matches(candidate: &str) -> bool {
        candidate == Self::TOKEN
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("---", true)]
    #[case("hello", false)]
    #[case("--", false)]
    #[case("----", false)]
    #[case("- - -", false)]
    #[case("***", false)]
    fn matches_exact_token(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(ThematicBreak::matches(input), expected);
    }
}

/// Separator between block candidates: one blank line.
pub const BLOCK_DELIMITER: &str = "\n\n";

/// Splits a document into block candidates.
///
/// Candidates are separated by a blank line; longer runs of line breaks
/// collapse into the same split. Each candidate is trimmed and empty ones
/// are dropped, so an empty document yields no candidates. `\r\n` line
/// endings are normalized first.
pub fn split_blocks(text: &str) -> Vec<String> {
    let text = text.replace("\r\n", "\n");
    text.split(BLOCK_DELIMITER)
        .map(str::trim)
        .filter(|candidate| !candidate.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::empty("", &[])]
    #[case::whitespace_only(" \n\n\t\n\n", &[])]
    #[case::single("hello", &["hello"])]
    #[case::two_blocks("# Title\n\nbody", &["# Title", "body"])]
    #[case::single_newline_keeps_block("a\nb", &["a\nb"])]
    #[case::long_blank_run("a\n\n\n\n\nb", &["a", "b"])]
    #[case::trims_candidates("  a  \n\n\tb\n", &["a", "b"])]
    #[case::crlf("a\r\n\r\nb\r\nc", &["a", "b\nc"])]
    fn splits(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(split_blocks(input), expected);
    }

    #[rstest]
    #[case("# Title\n\n\n\nsome *text*\nmore\n\n\n---\n\n")]
    #[case("\n\n  * a\n* b  \n\n```\ncode\n```")]
    #[case("")]
    fn rejoining_reproduces_the_skeleton(#[case] input: &str) {
        let blocks = split_blocks(input);
        let rejoined = blocks.join(BLOCK_DELIMITER);
        assert_eq!(split_blocks(&rejoined), blocks);
    }
}

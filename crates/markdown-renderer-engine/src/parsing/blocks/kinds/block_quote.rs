/// Blockquote block type with owned prefix constants.
pub struct BlockQuote;

impl BlockQuote {
    /// Accepted line prefixes, tried in order against the first line.
    pub const PREFIXES: [&'static str; 3] = ["> ", "  ", "\t"];

    /// Picks the quote prefix for `candidate`.
    ///
    /// The prefix is chosen from the first line, then every line must carry
    /// exactly that prefix. One non-conforming line disqualifies the block.
    pub fn prefix(candidate: &str) -> Option<&'static str> {
        let first = candidate.split('\n').next()?;
        let prefix = Self::PREFIXES
            .into_iter()
            .find(|prefix| first.starts_with(prefix))?;
        candidate
            .split('\n')
            .all(|line| line.starts_with(prefix))
            .then_some(prefix)
    }

    /// Strips `prefix` from every line and rejoins the lines.
    pub fn strip(candidate: &str, prefix: &str) -> String {
        candidate
            .split('\n')
            .map(|line| line.strip_prefix(prefix).unwrap_or(line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

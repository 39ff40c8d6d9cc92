/// Heading block type with owned marker constants.
pub struct Heading;

impl Heading {
    /// The heading marker character.
    pub const MARKER: char = '#';
    /// Deepest heading level.
    pub const MAX_LEVEL: u8 = 6;

    /// Length of the leading `#` run.
    pub fn marker_run(candidate: &str) -> usize {
        candidate.chars().take_while(|&c| c == Self::MARKER).count()
    }

    /// Returns the heading level, or `None` if `candidate` is not a heading.
    ///
    /// A heading is a single line starting with 1 to 6 `#` followed by a
    /// space. `#Title` has a marker run but no space and is rejected.
    pub fn level(candidate: &str) -> Option<u8> {
        if candidate.contains('\n') {
            return None;
        }
        let run = Self::marker_run(candidate);
        let level = u8::try_from(run)
            .ok()
            .filter(|level| (1..=Self::MAX_LEVEL).contains(level))?;
        candidate[run..].starts_with(' ').then_some(level)
    }

    /// Strips the `"#" * level + " "` prefix.
    pub fn strip(candidate: &str, level: u8) -> &str {
        candidate
            .get(usize::from(level) + 1..)
            .unwrap_or_default()
    }
}

/// Ordered list block type with its owned marker.
pub struct OrderedList;

impl OrderedList {
    /// Accepted on any line regardless of position.
    pub const GENERIC_MARKER: &'static str = "1. ";

    /// The position-specific marker, `"<position>. "`.
    pub fn marker(position: usize) -> String {
        format!("{position}. ")
    }

    /// Strips the marker from the line at 1-based `position`.
    pub fn strip_line(line: &str, position: usize) -> Option<&str> {
        line.strip_prefix(Self::GENERIC_MARKER)
            .or_else(|| line.strip_prefix(Self::marker(position).as_str()))
    }

    /// Item texts of an ordered list, or `None` if any line is unmarked.
    ///
    /// Every line gets the same two-way test against its own position, so an
    /// all-`1. ` list and a `1. 2. 3.` list both pass while `1. 3.` fails.
    pub fn items(candidate: &str) -> Option<Vec<&str>> {
        candidate
            .split('\n')
            .enumerate()
            .map(|(i, line)| Self::strip_line(line, i + 1))
            .collect()
    }
}

/// Unordered list block type with its owned markers.
pub struct UnorderedList;

impl UnorderedList {
    /// Bullet markers; lines may mix them freely.
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];

    pub fn strip_line(line: &str) -> Option<&str> {
        Self::MARKERS
            .into_iter()
            .find_map(|marker| line.strip_prefix(marker))
    }

    /// Item texts of an unordered list, or `None` if any line is unmarked.
    pub fn items(candidate: &str) -> Option<Vec<&str>> {
        candidate.split('\n').map(Self::strip_line).collect()
    }
}

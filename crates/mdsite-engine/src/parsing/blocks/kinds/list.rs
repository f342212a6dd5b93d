/// Unordered list items, `* item` or `- item`.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 2] = ["* ", "- "];

    /// The item text after the marker, if `line` is an item.
    ///
    /// A marker with nothing after it is not an item.
    pub fn strip(line: &str) -> Option<&str> {
        Self::MARKERS
            .iter()
            .find_map(|marker| line.strip_prefix(marker))
            .filter(|item| !item.is_empty())
    }
}

/// Ordered list items, `1. item`, numbered from one without gaps.
pub struct OrderedList;

impl OrderedList {
    /// Marker expected on the item at 1-based `position`.
    pub fn marker(position: usize) -> String {
        format!("{position}. ")
    }

    /// The item text, if `line` carries exactly the marker for `position`
    /// followed by some content.
    pub fn strip(line: &str, position: usize) -> Option<&str> {
        line.strip_prefix(Self::marker(position).as_str())
            .filter(|item| !item.is_empty())
    }
}

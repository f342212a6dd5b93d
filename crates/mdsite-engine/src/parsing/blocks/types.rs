/// The syntactic shape of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// `#` to `######` on the first line.
    Heading {
        /// Number of leading `#`, 1 to 6.
        level: u8,
    },
    /// Wrapped in triple-backtick fences. Raw zone: no inline parsing.
    Code,
    /// Every line starts with `> `.
    Quote,
    /// Every line starts with `* ` or `- `.
    UnorderedList,
    /// Line `n` starts with `n. ` for every line.
    OrderedList,
    /// Anything else.
    Paragraph,
}

/// One blank-line-separated unit of a document, borrowed from its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Trimmed raw text, possibly spanning several lines. Never empty.
    pub text: &'a str,
    pub kind: BlockKind,
}

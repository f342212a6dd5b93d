/// Blockquote block type.
pub struct BlockQuote;

impl BlockQuote {
    /// Marker a line must start with for the block to classify as a quote.
    pub const MARKER: &'static str = "> ";
    pub const PREFIX: char = '>';

    pub fn is_line(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Strips `"> "`, or a bare `">"` when no space follows.
    pub fn strip(line: &str) -> &str {
        line.strip_prefix(Self::MARKER)
            .or_else(|| line.strip_prefix(Self::PREFIX))
            .unwrap_or(line)
    }
}

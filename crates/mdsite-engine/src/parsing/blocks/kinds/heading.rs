/// ATX heading type, `# Title` through `###### Title`.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    /// Parses a heading line into `(level, content)`.
    ///
    /// Requires 1-6 `#`, exactly one space, then non-empty content.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let hashes = line.bytes().take_while(|&b| b == Self::MARKER as u8).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL as usize {
            return None;
        }
        let content = line[hashes..].strip_prefix(' ')?;
        if content.is_empty() {
            return None;
        }
        Some((hashes as u8, content))
    }
}

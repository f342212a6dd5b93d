/// Bold spans, `**text**`.
pub struct Bold;

impl Bold {
    pub const DELIMITER: &'static str = "**";
}

/// Italic spans, `*text*`.
///
/// Shares its character with [`Bold`], so bold must be split out first.
pub struct Italic;

impl Italic {
    pub const DELIMITER: &'static str = "*";
}

/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters. They are the fallback for any block no
/// other kind claims, and their lines are joined with single spaces before
/// inline parsing.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_JOIN: &'static str = " ";
}

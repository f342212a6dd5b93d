/// Inline code spans, `` `text` ``.
pub struct CodeSpan;

impl CodeSpan {
    pub const DELIMITER: &'static str = "`";
}

/// Fenced code block type, delimited by triple backticks.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Whether a whole block opens and closes with a fence.
    ///
    /// Blocks too short to hold two separate fences never qualify.
    pub fn wraps(block: &str) -> bool {
        block.len() >= 2 * Self::FENCE.len()
            && block.starts_with(Self::FENCE)
            && block.ends_with(Self::FENCE)
    }

    /// The literal text between the fences, if `block` is fenced.
    pub fn inner(block: &str) -> Option<&str> {
        if !Self::wraps(block) {
            return None;
        }
        Some(&block[Self::FENCE.len()..block.len() - Self::FENCE.len()])
    }
}

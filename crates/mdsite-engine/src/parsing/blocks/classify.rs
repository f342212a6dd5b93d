use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::{Block, BlockKind},
};

/// Classifies a raw block by its syntactic shape.
///
/// Precedence, first match wins:
/// 1. heading, judged on the first line alone
/// 2. code, when the whole block is fenced
/// 3. quote / unordered list / ordered list, when *every* line carries the
///    same kind of marker (a quote also needs some text after its markers)
/// 4. paragraph
pub fn classify(block: &str) -> BlockKind {
    let first_line = block.lines().next().unwrap_or_default();
    if let Some((level, _)) = Heading::parse(first_line) {
        return BlockKind::Heading { level };
    }

    if CodeFence::wraps(block) {
        return BlockKind::Code;
    }

    if block.lines().all(BlockQuote::is_line)
        && block.lines().any(|line| !BlockQuote::strip(line).is_empty())
    {
        return BlockKind::Quote;
    }

    if block.lines().all(|line| UnorderedList::strip(line).is_some()) {
        return BlockKind::UnorderedList;
    }

    if block
        .lines()
        .enumerate()
        .all(|(i, line)| OrderedList::strip(line, i + 1).is_some())
    {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

impl<'a> Block<'a> {
    /// Pairs `text` with its classification.
    pub fn classify(text: &'a str) -> Self {
        Self {
            text,
            kind: classify(text),
        }
    }
}

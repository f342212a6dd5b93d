use crate::{
    error::ConvertError,
    html::{HtmlNode, span_to_html_node},
    parsing::inline::text_to_spans,
};

use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::{Block, BlockKind},
};

/// Lowers a classified block into its node subtree.
///
/// # Errors
/// Inline syntax errors from [`text_to_spans`], and construction errors when
/// a block lowers to an element with no content (e.g. an empty fenced block).
pub fn block_to_node(block: &Block<'_>) -> Result<HtmlNode, ConvertError> {
    log::debug!("lowering {:?} block ({} bytes)", block.kind, block.text.len());

    let node = match block.kind {
        BlockKind::Paragraph => HtmlNode::parent("p", inline_children(&join_lines(block.text))?)?,
        BlockKind::Heading { level } => heading_to_node(block.text, level)?,
        BlockKind::Code => code_to_node(block.text)?,
        BlockKind::Quote => {
            let text = block
                .text
                .lines()
                .map(BlockQuote::strip)
                .collect::<Vec<_>>()
                .join(Paragraph::LINE_JOIN);
            HtmlNode::parent("blockquote", inline_children(&text)?)?
        }
        BlockKind::UnorderedList => {
            let items = block
                .text
                .lines()
                .map(|line| list_item(UnorderedList::strip(line).unwrap_or(line)))
                .collect::<Result<Vec<_>, _>>()?;
            HtmlNode::parent("ul", items)?
        }
        BlockKind::OrderedList => {
            let items = block
                .text
                .lines()
                .enumerate()
                .map(|(i, line)| list_item(OrderedList::strip(line, i + 1).unwrap_or(line)))
                .collect::<Result<Vec<_>, _>>()?;
            HtmlNode::parent("ol", items)?
        }
    };

    Ok(node)
}

/// Runs inline parsing over `text` and converts every span to a leaf.
fn inline_children(text: &str) -> Result<Vec<HtmlNode>, ConvertError> {
    text_to_spans(text)?
        .iter()
        .map(|span| span_to_html_node(span).map_err(ConvertError::from))
        .collect()
}

fn join_lines(text: &str) -> String {
    text.lines().collect::<Vec<_>>().join(Paragraph::LINE_JOIN)
}

/// Strips the `#` marker and inline-parses the rest; continuation lines join
/// the heading text like paragraph lines do.
fn heading_to_node(text: &str, level: u8) -> Result<HtmlNode, ConvertError> {
    let mut lines = text.lines();
    let first = lines.next().unwrap_or_default();
    let content = Heading::parse(first).map_or(first, |(_, content)| content);

    let joined = std::iter::once(content)
        .chain(lines)
        .collect::<Vec<_>>()
        .join(Paragraph::LINE_JOIN);

    Ok(HtmlNode::parent(
        format!("h{level}"),
        inline_children(&joined)?,
    )?)
}

/// `<pre><code>inner</code></pre>` with the inner text taken literally.
fn code_to_node(text: &str) -> Result<HtmlNode, ConvertError> {
    let inner = CodeFence::inner(text).unwrap_or(text);
    let code = HtmlNode::leaf(Some("code"), inner)?;
    Ok(HtmlNode::parent("pre", vec![code])?)
}

fn list_item(text: &str) -> Result<HtmlNode, ConvertError> {
    Ok(HtmlNode::parent("li", inline_children(text)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NodeError, ParseError};

    fn render(text: &str) -> String {
        block_to_node(&Block::classify(text))
            .unwrap()
            .render()
            .unwrap()
    }

    #[test]
    fn paragraph_joins_lines_with_spaces() {
        assert_eq!(
            render("This is **bolded** paragraph\ntext in a p\ntag here"),
            "<p>This is <b>bolded</b> paragraph text in a p tag here</p>"
        );
    }

    #[test]
    fn heading_uses_level_tag() {
        assert_eq!(render("### deep *title*"), "<h3>deep <i>title</i></h3>");
    }

    #[test]
    fn code_is_not_inline_parsed() {
        assert_eq!(
            render("```\nlet **x** = `y`;\n```"),
            "<pre><code>\nlet **x** = `y`;\n</code></pre>"
        );
    }

    #[test]
    fn quote_strips_markers() {
        assert_eq!(
            render("> This is a\n> blockquote block"),
            "<blockquote>This is a blockquote block</blockquote>"
        );
    }

    #[test]
    fn unordered_list_items() {
        assert_eq!(
            render("- This is a list\n- with items\n- and *more* items"),
            "<ul><li>This is a list</li><li>with items</li><li>and <i>more</i> items</li></ul>"
        );
    }

    #[test]
    fn ordered_list_items() {
        assert_eq!(
            render("1. This is an `ordered` list\n2. with items\n3. and more items"),
            "<ol><li>This is an <code>ordered</code> list</li><li>with items</li><li>and more items</li></ol>"
        );
    }

    #[test]
    fn bare_list_markers_lower_as_paragraph() {
        assert_eq!(render("- a\n- \n- b"), "<p>- a -  - b</p>");
        assert_eq!(render("1. a\n2. \n3. b"), "<p>1. a 2.  3. b</p>");
    }

    #[test]
    fn inline_errors_propagate() {
        let err = block_to_node(&Block::classify("broken **bold")).unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Parse(ParseError::MismatchedDelimiter { .. })
        ));
    }

    #[test]
    fn empty_fence_fails_construction() {
        let err = block_to_node(&Block::classify("``````")).unwrap_err();
        assert_eq!(
            err,
            ConvertError::Node(NodeError::MissingValue {
                tag: Some("code".to_string())
            })
        );
    }
}

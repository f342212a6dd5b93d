use crate::{
    error::NodeError,
    parsing::inline::{Span, SpanKind},
};

use super::node::{HtmlNode, IMG_TAG, LeafNode, Props};

/// Maps one inline span onto the leaf that renders it.
///
/// | kind   | leaf                                   |
/// |--------|----------------------------------------|
/// | Plain  | untagged, value = text                 |
/// | Bold   | `<b>`                                  |
/// | Italic | `<i>`                                  |
/// | Code   | `<code>`                               |
/// | Link   | `<a href=destination>`                 |
/// | Image  | `<img src=destination alt=text>`, empty value |
///
/// A link or image without a destination renders with an empty attribute.
pub fn span_to_html_node(span: &Span) -> Result<HtmlNode, NodeError> {
    let text = span.text.as_str();
    let destination = span.destination.as_deref().unwrap_or_default();

    let leaf = match span.kind {
        SpanKind::Plain => LeafNode::new(None, text)?,
        SpanKind::Bold => LeafNode::new(Some("b"), text)?,
        SpanKind::Italic => LeafNode::new(Some("i"), text)?,
        SpanKind::Code => LeafNode::new(Some("code"), text)?,
        SpanKind::Link => {
            LeafNode::with_props(Some("a"), text, Props::new().with("href", destination))?
        }
        SpanKind::Image => LeafNode::with_props(
            Some(IMG_TAG),
            "",
            Props::new().with("src", destination).with("alt", text),
        )?,
    };

    Ok(leaf.into())
}

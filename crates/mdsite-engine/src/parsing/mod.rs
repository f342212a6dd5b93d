//! # Markdown Parsing
//!
//! The two-stage conversion pipeline:
//!
//! ```text
//! document ─ split ─> raw blocks ─ classify ─> Block ─ lower ─> HtmlNode ─┐
//!                                                   │                    │
//!                                    text_to_spans ─┘        <div> root ─┘
//! ```
//!
//! - **`blocks`**: block splitting, classification and lowering
//! - **`inline`**: span parsing used by lowering for every text run
//! - **`title`**: page title extraction for the page-generation layer

pub mod blocks;
pub mod inline;
pub mod title;

use blocks::{Block, block_to_node, split_blocks};

use crate::{error::ConvertError, html::HtmlNode};

/// Tag of the root element wrapping every block of a document.
pub const ROOT_TAG: &str = "div";

/// Converts a whole document into a single `<div>` rooted tree.
///
/// `\r\n` line endings are read as `\n`.
///
/// # Errors
/// Fails on mismatched inline delimiters anywhere in the document, and on an
/// empty document, since the root must have at least one child.
pub fn document_to_node(markdown: &str) -> Result<HtmlNode, ConvertError> {
    let markdown = markdown.replace("\r\n", "\n");
    let raw_blocks = split_blocks(&markdown);
    log::debug!("split document into {} blocks", raw_blocks.len());

    let children = raw_blocks
        .into_iter()
        .map(|text| block_to_node(&Block::classify(text)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(HtmlNode::parent(ROOT_TAG, children)?)
}

/// Converts a document straight to its body HTML.
pub fn markdown_to_html(markdown: &str) -> Result<String, ConvertError> {
    Ok(document_to_node(markdown)?.render()?)
}

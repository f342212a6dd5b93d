pub mod error;
pub mod html;
pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use error::{ConvertError, NodeError, ParseError, SiteError, TitleError};
pub use html::{HtmlNode, LeafNode, ParentNode, Props};
pub use models::SourcePage;
pub use parsing::{
    blocks::{Block, BlockKind},
    document_to_node,
    inline::{Span, SpanKind, text_to_spans},
    markdown_to_html,
    title::extract_title,
};

use std::path::PathBuf;

/// Violations of the [`HtmlNode`](crate::html::HtmlNode) construction contract.
///
/// These indicate a bug in block lowering rather than malformed input, with the
/// one exception of empty inline spans (`****`, `[](url)`), which lower to
/// valueless leaves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NodeError {
    #[error("leaf node <{}> is missing a value", tag.as_deref().unwrap_or("text"))]
    MissingValue { tag: Option<String> },
    #[error("parent node is missing a tag")]
    MissingTag,
    #[error("parent node <{tag}> has no children")]
    MissingChildren { tag: String },
}

/// Inline syntax errors in user-supplied markdown.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("mismatched delimiter `{delimiter}` in text: {text}")]
    MismatchedDelimiter { delimiter: String, text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TitleError {
    #[error("No h1 header found")]
    NoTitle,
}

/// Everything that can abort a markdown to node-tree conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Node(#[from] NodeError),
}

/// Errors from the page-generation layer.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to convert {path}: {source}")]
    Convert {
        path: PathBuf,
        #[source]
        source: ConvertError,
    },
    #[error("document has no H1: {path}")]
    MissingTitle { path: PathBuf },
    #[error("Invalid directory: {0}")]
    InvalidDirectory(String),
}

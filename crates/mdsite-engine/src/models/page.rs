use relative_path::{RelativePath, RelativePathBuf};

/// A markdown source relative to the content root, paired with the path of
/// the HTML page it generates relative to the output root.
#[derive(Debug, Clone, PartialEq)]
pub struct SourcePage {
    relative_path: RelativePathBuf,
    output_path: RelativePathBuf,
}

impl SourcePage {
    pub const SOURCE_EXTENSION: &'static str = "md";
    pub const OUTPUT_EXTENSION: &'static str = "html";

    pub fn new(relative_path: RelativePathBuf) -> Self {
        let output_path = relative_path.with_extension(Self::OUTPUT_EXTENSION);
        Self {
            relative_path,
            output_path,
        }
    }

    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// Path of the markdown source under the content root
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Path of the generated page under the output root
    pub fn output_path(&self) -> &RelativePath {
        &self.output_path
    }
}

impl From<RelativePathBuf> for SourcePage {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for SourcePage {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}

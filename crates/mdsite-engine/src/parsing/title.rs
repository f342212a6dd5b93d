use crate::error::TitleError;

/// Prefix of the line that names a page.
pub const TITLE_PREFIX: &str = "# ";

/// Returns the text of the first `# ` line anywhere in the document, trimmed.
///
/// Block boundaries are ignored and inline markup is kept verbatim. A `# `
/// line with nothing but whitespace after it does not count.
pub fn extract_title(markdown: &str) -> Result<String, TitleError> {
    markdown
        .lines()
        .filter_map(|line| line.strip_prefix(TITLE_PREFIX))
        .map(str::trim)
        .find(|title| !title.is_empty())
        .map(str::to_string)
        .ok_or(TitleError::NoTitle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Hello", "Hello")]
    #[case("#   Hello World   ", "Hello World")]
    #[case("\nSome text\n# My Title\nMore text\n", "My Title")]
    #[case("\n## Subheading\n# Main Title\n### Another subheading\n", "Main Title")]
    #[case(
        "# This is **bold** and *italic*",
        "This is **bold** and *italic*"
    )]
    #[case("# \n# Second", "Second")]
    fn finds_title(#[case] markdown: &str, #[case] title: &str) {
        assert_eq!(extract_title(markdown).unwrap(), title);
    }

    #[test]
    fn missing_title_is_an_error() {
        let err = extract_title("No header here").unwrap_err();
        assert_eq!(err, TitleError::NoTitle);
        assert_eq!(err.to_string(), "No h1 header found");
    }

    #[test]
    fn deeper_headings_do_not_count() {
        assert!(extract_title("## only h2\n### and h3").is_err());
    }
}

/// Separator between blocks. Longer runs of newlines leave only whitespace
/// pieces behind, which are dropped.
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Splits a document into trimmed, non-empty raw blocks, in order.
pub fn split_blocks(document: &str) -> Vec<&str> {
    document
        .split(BLOCK_SEPARATOR)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_block() {
        assert_eq!(
            split_blocks("# This is a heading"),
            vec!["# This is a heading"]
        );
    }

    #[test]
    fn multiple_blocks_keep_inner_newlines() {
        let md = "# This is a heading\n\nThis is a paragraph of text. It has some **bold** and *italic* words inside of it.\n\n* This is the first list item in a list block\n* This is a list item\n* This is another list item";
        assert_eq!(
            split_blocks(md),
            vec![
                "# This is a heading",
                "This is a paragraph of text. It has some **bold** and *italic* words inside of it.",
                "* This is the first list item in a list block\n* This is a list item\n* This is another list item",
            ]
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let md = "  # This is a heading  \n\nThis is a paragraph of text.  \n\n* This is a list item  \n";
        assert_eq!(
            split_blocks(md),
            vec![
                "# This is a heading",
                "This is a paragraph of text.",
                "* This is a list item",
            ]
        );
    }

    #[test]
    fn excessive_newlines_collapse() {
        assert_eq!(
            split_blocks("# Heading 1\n\n\n\n\n# Heading 2"),
            vec!["# Heading 1", "# Heading 2"]
        );
    }

    #[test]
    fn empty_document_has_no_blocks() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("\n\n   \n\n").is_empty());
    }

    #[test]
    fn idempotent_on_single_block() {
        let block = "* a\n* b";
        assert_eq!(split_blocks(block), vec![block]);
        assert_eq!(split_blocks(split_blocks(block)[0]), vec![block]);
    }
}

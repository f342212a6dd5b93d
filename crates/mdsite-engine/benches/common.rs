// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point with a [link](https://example.com)\n- Another item\n\n1. First\n2. Second\n\n> Quoted\n> text\n\n```\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// Many unclosed brackets and parens in one paragraph, to keep the non-greedy
/// link and image patterns honest.
#[allow(dead_code)]
pub fn generate_bracket_heavy(size: usize) -> String {
    let mut content = String::from("# Brackets\n\n");
    content.push_str(&"[a](b ![c](d [e]( ".repeat(size));
    content.push_str("[end](https://example.com)\n");
    content
}

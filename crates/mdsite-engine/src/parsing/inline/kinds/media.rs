use std::sync::LazyLock;

use regex::Regex;

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| compile(Image::PATTERN));
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| compile(Link::PATTERN));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        log::error!("Failed to compile inline pattern {pattern}: {e}");
        never_matching_regex()
    })
}

/// A regex that matches nothing, used if a built-in pattern fails to compile.
fn never_matching_regex() -> Regex {
    Regex::new(r"[^\s\S]").expect("Failed to compile never-matching regex")
}

/// Inline images, `![alt](url)`.
pub struct Image;

impl Image {
    /// Non-greedy on both the alt text and the url.
    pub const PATTERN: &'static str = r"!\[(.*?)\]\((.*?)\)";

    pub fn regex() -> &'static Regex {
        &IMAGE_RE
    }

    /// Reconstructs the literal markdown for an extracted pair.
    pub fn markdown(alt: &str, url: &str) -> String {
        format!("![{alt}]({url})")
    }
}

/// Inline links, `[text](url)`.
///
/// The pattern also matches the tail of image markdown; callers must split
/// images out first.
pub struct Link;

impl Link {
    pub const PATTERN: &'static str = r"\[(.*?)\]\((.*?)\)";

    pub fn regex() -> &'static Regex {
        &LINK_RE
    }

    pub fn markdown(text: &str, url: &str) -> String {
        format!("[{text}]({url})")
    }
}

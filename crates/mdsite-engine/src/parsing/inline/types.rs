/// The presentational kind of an inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    /// Text with no markup; the only kind later pipeline stages split further.
    Plain,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `` `code` `` - no further parsing inside.
    Code,
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
}

/// A contiguous run of inline text tagged with one [`SpanKind`].
///
/// `destination` is set for [`SpanKind::Link`] and [`SpanKind::Image`] only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub kind: SpanKind,
    pub destination: Option<String>,
}

impl Span {
    pub fn new(text: impl Into<String>, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            kind,
            destination: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanKind::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            destination: Some(url.into()),
            ..Self::new(text, SpanKind::Link)
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            destination: Some(url.into()),
            ..Self::new(alt, SpanKind::Image)
        }
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_includes_destination() {
        assert_ne!(Span::link("a", "u"), Span::new("a", SpanKind::Link));
        assert_ne!(Span::image("a", "u"), Span::image("a", "v"));
        assert_eq!(Span::link("a", "u"), Span::link("a", "u"));
    }

    #[test]
    fn equality_includes_kind() {
        assert_ne!(Span::plain("a"), Span::new("a", SpanKind::Bold));
    }
}

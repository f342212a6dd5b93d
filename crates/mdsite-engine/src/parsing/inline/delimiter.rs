use crate::error::ParseError;

use super::types::{Span, SpanKind};

/// Splits every plain span on `delimiter`, assigning odd pieces `kind`.
///
/// Non-plain spans pass through untouched. Empty plain pieces are dropped,
/// but empty styled pieces are kept: `****` yields one empty bold span.
///
/// # Errors
/// [`ParseError::MismatchedDelimiter`] when a plain span contains an odd
/// number of delimiters.
pub fn split_by_delimiter(
    spans: Vec<Span>,
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<Span>, ParseError> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let pieces: Vec<&str> = span.text.split(delimiter).collect();
        if pieces.len() % 2 == 0 {
            return Err(ParseError::MismatchedDelimiter {
                delimiter: delimiter.to_string(),
                text: span.text.clone(),
            });
        }

        for (i, piece) in pieces.into_iter().enumerate() {
            if i % 2 == 1 {
                out.push(Span::new(piece, kind));
            } else if !piece.is_empty() {
                out.push(Span::plain(piece));
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::inline::kinds::{Bold, CodeSpan, Italic};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(
        "This is text with a `code block` word",
        CodeSpan::DELIMITER,
        SpanKind::Code,
        "code block"
    )]
    #[case("This is **bold** text", Bold::DELIMITER, SpanKind::Bold, "bold")]
    #[case("This is *italic* text", Italic::DELIMITER, SpanKind::Italic, "italic")]
    fn splits_around_delimited_word(
        #[case] text: &str,
        #[case] delimiter: &str,
        #[case] kind: SpanKind,
        #[case] inner: &str,
    ) {
        let spans = split_by_delimiter(vec![Span::plain(text)], delimiter, kind).unwrap();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1], Span::new(inner, kind));
        assert!(spans[0].is_plain() && spans[2].is_plain());
    }

    #[test]
    fn code_example_yields_exact_spans() {
        let spans = split_by_delimiter(
            vec![Span::plain("This is text with a `code block` word")],
            "`",
            SpanKind::Code,
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with a "),
                Span::new("code block", SpanKind::Code),
                Span::plain(" word"),
            ]
        );
    }

    #[test]
    fn unpaired_delimiter_is_an_error() {
        let err = split_by_delimiter(
            vec![Span::plain("This is text with a `mismatched code block")],
            "`",
            SpanKind::Code,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ParseError::MismatchedDelimiter {
                delimiter: "`".to_string(),
                text: "This is text with a `mismatched code block".to_string(),
            }
        );
    }

    #[test]
    fn non_plain_spans_pass_through() {
        let spans = vec![
            Span::new("Not to split", SpanKind::Bold),
            Span::new("Another `node`", SpanKind::Italic),
        ];
        let out = split_by_delimiter(spans.clone(), "`", SpanKind::Code).unwrap();
        assert_eq!(out, spans);
    }

    #[test]
    fn empty_plain_span_disappears() {
        let out = split_by_delimiter(vec![Span::plain("")], "`", SpanKind::Code).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn empty_styled_piece_is_kept() {
        let out = split_by_delimiter(vec![Span::plain("****")], "**", SpanKind::Bold).unwrap();
        assert_eq!(out, vec![Span::new("", SpanKind::Bold)]);
    }

    #[test]
    fn trailing_delimited_piece_leaves_no_empty_plain() {
        let spans = split_by_delimiter(
            vec![Span::plain("Mix `code` and **bold**")],
            "`",
            SpanKind::Code,
        )
        .unwrap();
        let spans = split_by_delimiter(spans, "**", SpanKind::Bold).unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("Mix "),
                Span::new("code", SpanKind::Code),
                Span::plain(" and "),
                Span::new("bold", SpanKind::Bold),
            ]
        );
    }
}

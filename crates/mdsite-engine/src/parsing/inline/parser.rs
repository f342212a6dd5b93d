use crate::error::ParseError;

use super::{
    delimiter::split_by_delimiter,
    kinds::{Bold, CodeSpan, Italic},
    media::{split_by_images, split_by_links},
    types::{Span, SpanKind},
};

/// Parses one run of inline text into an ordered sequence of [`Span`]s.
///
/// Stages run in a fixed order, each splitting only the plain spans left by
/// the previous one:
///
/// 1. bold (`**`)
/// 2. italic (`*`), after bold since `*` is a substring of `**`
/// 3. code (`` ` ``)
/// 4. images (`![alt](url)`)
/// 5. links (`[text](url)`), after images so image markdown is already gone
///
/// # Errors
/// Fails on the first unpaired `**`, `*` or `` ` ``.
pub fn text_to_spans(text: &str) -> Result<Vec<Span>, ParseError> {
    let spans = vec![Span::plain(text)];
    let spans = split_by_delimiter(spans, Bold::DELIMITER, SpanKind::Bold)?;
    let spans = split_by_delimiter(spans, Italic::DELIMITER, SpanKind::Italic)?;
    let spans = split_by_delimiter(spans, CodeSpan::DELIMITER, SpanKind::Code)?;
    let spans = split_by_images(spans);
    Ok(split_by_links(spans))
}

//! Extraction and splitting of `![alt](url)` and `[text](url)` syntax.

use regex::Regex;

use super::{
    kinds::{Image, Link},
    types::{Span, SpanKind},
};

/// Returns every `(alt, url)` pair in `text`, left to right.
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    extract_pairs(Image::regex(), text)
}

/// Returns every `(text, url)` pair in `text`, left to right.
///
/// Image markdown matches too (as its `[alt](url)` tail).
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    extract_pairs(Link::regex(), text)
}

fn extract_pairs(re: &Regex, text: &str) -> Vec<(String, String)> {
    re.captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Splits plain spans around image markdown.
pub fn split_by_images(spans: Vec<Span>) -> Vec<Span> {
    split_by_pairs(spans, extract_images, Image::markdown, |alt, url| {
        Span::image(alt, url)
    })
}

/// Splits plain spans around link markdown.
///
/// Expects images to have been split out already: any image markdown still in
/// a plain span would be read as a link preceded by a literal `!`.
pub fn split_by_links(spans: Vec<Span>) -> Vec<Span> {
    split_by_pairs(spans, extract_links, Link::markdown, |text, url| {
        Span::link(text, url)
    })
}

fn split_by_pairs(
    spans: Vec<Span>,
    extract: fn(&str) -> Vec<(String, String)>,
    markdown: fn(&str, &str) -> String,
    make: fn(String, String) -> Span,
) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if span.kind != SpanKind::Plain {
            out.push(span);
            continue;
        }

        let pairs = extract(&span.text);
        if pairs.is_empty() {
            out.push(span);
            continue;
        }

        let mut rest = span.text.as_str();
        for (label, url) in pairs {
            let needle = markdown(&label, &url);
            let Some((before, after)) = rest.split_once(needle.as_str()) else {
                break;
            };
            if !before.is_empty() {
                out.push(Span::plain(before));
            }
            out.push(make(label, url));
            rest = after;
        }

        if !rest.is_empty() {
            out.push(Span::plain(rest));
        }
    }

    out
}

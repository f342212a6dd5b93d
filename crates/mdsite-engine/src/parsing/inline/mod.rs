//! # Inline Parsing
//!
//! Turns one run of text into typed [`Span`]s via a fixed pipeline of
//! split passes.
//!
//! ## Modules
//!
//! - **`types`**: `Span` and `SpanKind`
//! - **`kinds`**: delimiter and pattern knowledge per inline construct
//! - **`delimiter`**: `split_by_delimiter` for paired markers (`**`, `*`, `` ` ``)
//! - **`media`**: extraction and splitting for images and links
//! - **`parser`**: `text_to_spans`, the composed pipeline
//!
//! ## Ordering
//!
//! Every pass only touches spans still marked plain, so the order of passes
//! decides precedence. Bold precedes italic, and images precede links.

pub mod delimiter;
pub mod kinds;
pub mod media;
pub mod parser;
pub mod types;

pub use delimiter::split_by_delimiter;
pub use media::{extract_images, extract_links, split_by_images, split_by_links};
pub use parser::text_to_spans;
pub use types::{Span, SpanKind};

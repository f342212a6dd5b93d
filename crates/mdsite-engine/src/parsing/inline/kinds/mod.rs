//! # Inline Kinds
//!
//! Every inline construct owns its syntax here: delimiter strings for the
//! paired kinds, regex patterns and markdown reconstruction for images and
//! links. Parser code never hardcodes `**` or `](`.

pub mod code_span;
pub mod emphasis;
pub mod media;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use media::{Image, Link};

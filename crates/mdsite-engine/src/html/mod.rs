//! # HTML Node Model
//!
//! A closed two-variant tree ([`HtmlNode::Leaf`] / [`HtmlNode::Parent`]) and
//! its serialization. Construction validates the invariants that rendering
//! re-checks, so any tree built through the constructors renders.

pub mod convert;
pub mod node;

pub use convert::span_to_html_node;
pub use node::{HtmlNode, LeafNode, ParentNode, Props};

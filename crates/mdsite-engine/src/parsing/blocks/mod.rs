//! # Block Parsing
//!
//! Three steps, each a plain function:
//!
//! 1. **Split** (`split`): the document is cut on blank lines into trimmed raw
//!    blocks
//! 2. **Classify** (`classify`): each block gets a [`BlockKind`] from its
//!    shape
//! 3. **Lower** (`lower`): each classified block becomes a node subtree, with
//!    inline parsing applied to every text run except fenced code
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `BlockKind`
//! - **`kinds`**: marker knowledge per block kind (headings, fences, quotes,
//!   lists, paragraphs)
//! - **`split`**, **`classify`**, **`lower`**: the three steps above
//!
//! ## Key Invariants
//!
//! - No block is ever empty or whitespace-only
//! - List and quote kinds require *every* line to carry the marker
//! - Fenced code blocks are raw zones: no inline parsing inside

pub mod classify;
pub mod kinds;
pub mod lower;
pub mod split;
pub mod types;

pub use classify::classify;
pub use lower::block_to_node;
pub use split::split_blocks;
pub use types::{Block, BlockKind};

//! # Document Parsing
//!
//! Line-oriented passes that turn raw deck text into slide-sized pieces.
//!
//! ## Passes
//!
//! 1. **Chunks** (`chunks`): split at `---` delimiter lines
//! 2. **Frontmatter** (`frontmatter`): peel off global metadata, attach
//!    per-slide metadata to the content chunk that follows it
//! 3. **Notes** (`notes`): strip a trailing speaker-note comment
//! 4. **Steps** (`steps`): split at `<!-- pause -->` reveal markers
//!
//! ## Key Invariants
//!
//! - Fenced code blocks are raw zones: delimiters and markers inside them are
//!   ordinary text (`fence`)
//! - Every pass is total; malformed input degrades, it never errors

pub mod chunks;
pub mod fence;
pub mod frontmatter;
pub mod notes;
pub mod steps;

pub use chunks::split_chunks;
pub use fence::{FenceScanner, FenceState, scan_lines};
pub use frontmatter::{
    ContentChunk, attach_frontmatter, is_metadata_chunk, parse_metadata, split_global_meta,
};
pub use notes::extract_notes;
pub use steps::{is_pause_marker, split_steps};

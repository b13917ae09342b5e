//! Compile a Markdown talk into an ordered deck of slides.
//!
//! ```
//! let deck = slidedeck_engine::compile("# Hello\n\nWorld\n---\n> a wise quote");
//! assert_eq!(deck.len(), 2);
//! assert_eq!(deck.slides[0].layout(), "cover");
//! assert_eq!(deck.slides[1].layout(), "center");
//! ```

pub mod analysis;
pub mod compile;
pub mod io;
pub mod models;
pub mod navigation;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use analysis::{ContentProfile, Layout};
pub use compile::{compile, compile_with};
pub use io::*;
pub use models::*;
pub use navigation::Position;
#[cfg(feature = "highlight")]
pub use render::ArboriumHighlighter;
pub use render::{DefaultHighlighter, Highlighter, HtmlRenderer, MarkupRenderer, PlainHighlighter};

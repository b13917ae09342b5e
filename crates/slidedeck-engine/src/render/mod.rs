//! Rendering seam between the compiler and a Markdown/highlighting backend.
//!
//! The compiler only needs two capabilities: turning a step's Markdown into a
//! standalone fragment ([`MarkupRenderer`]) and highlighting a code block
//! ([`Highlighter`]). [`HtmlRenderer`] is the default backend and highlights
//! with arborium when the `highlight` feature is on. Fenced code is always
//! routed through [`code`] so line highlights and diagram blocks behave the
//! same regardless of highlighter.

pub mod code;
pub mod highlight;
pub mod html;

pub use code::{CodeInfo, LineSet};
#[cfg(feature = "highlight")]
pub use highlight::ArboriumHighlighter;
pub use highlight::PlainHighlighter;
pub use html::{DEFAULT_DIAGRAM_LANGUAGE, HtmlRenderer};

/// Converts one step's Markdown into a complete presentable fragment.
pub trait MarkupRenderer {
    fn render(&self, segment: &str) -> String;
}

/// Highlights code for display inside `<pre><code>`.
///
/// Implementations must accept any language hint, including unknown ones,
/// and fall back to a best-effort rendering instead of failing. The returned
/// markup must keep one output line per input line.
pub trait Highlighter {
    fn highlight(&self, code: &str, language: Option<&str>) -> String;
}

/// Highlighter used by [`HtmlRenderer::new`].
#[cfg(feature = "highlight")]
pub type DefaultHighlighter = ArboriumHighlighter;

/// Highlighter used by [`HtmlRenderer::new`].
#[cfg(not(feature = "highlight"))]
pub type DefaultHighlighter = PlainHighlighter;

impl<T: MarkupRenderer + ?Sized> MarkupRenderer for &T {
    fn render(&self, segment: &str) -> String {
        (**self).render(segment)
    }
}

use super::Highlighter;

/// Highlighter that escapes code without colouring it.
///
/// This is the fallback when no grammar covers a block, and the default when
/// the crate is built without the `highlight` feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, _language: Option<&str>) -> String {
        html_escape::encode_text(code).into_owned()
    }
}

/// Tree-sitter highlighting via arborium.
///
/// Tokens come out as arborium's custom elements (`<a-k>`, `<a-s>`, ...).
/// Blocks without a language hint, or whose language arborium does not know,
/// are escaped by [`PlainHighlighter`] instead.
#[cfg(feature = "highlight")]
pub struct ArboriumHighlighter {
    inner: std::sync::Mutex<arborium::Highlighter>,
}

#[cfg(feature = "highlight")]
impl ArboriumHighlighter {
    pub fn new() -> Self {
        Self {
            inner: std::sync::Mutex::new(arborium::Highlighter::new()),
        }
    }
}

#[cfg(feature = "highlight")]
impl Default for ArboriumHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "highlight")]
impl std::fmt::Debug for ArboriumHighlighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArboriumHighlighter").finish_non_exhaustive()
    }
}

#[cfg(feature = "highlight")]
impl Highlighter for ArboriumHighlighter {
    fn highlight(&self, code: &str, language: Option<&str>) -> String {
        let Some(language) = language.map(grammar_name) else {
            return PlainHighlighter.highlight(code, None);
        };

        let Ok(mut hl) = self.inner.lock() else {
            log::warn!("Highlighter lock poisoned, rendering {language} block as plain text");
            return PlainHighlighter.highlight(code, None);
        };

        match hl.highlight_to_html(&language, code) {
            Ok(html) => html,
            Err(e) => {
                log::debug!("No highlighting for {language}: {e}");
                PlainHighlighter.highlight(code, None)
            }
        }
    }
}

/// Map the short fence tags people actually type onto arborium grammar names.
#[cfg_attr(not(feature = "highlight"), allow(dead_code))]
fn grammar_name(tag: &str) -> String {
    let tag = tag.to_lowercase();
    let name = match tag.as_str() {
        "js" | "jsx" => "javascript",
        "ts" | "tsx" => "typescript",
        "py" => "python",
        "rb" => "ruby",
        "rs" => "rust",
        "sh" | "zsh" | "shell" | "console" => "bash",
        "yml" => "yaml",
        "md" => "markdown",
        "c++" | "cc" | "cxx" => "cpp",
        "c#" | "cs" | "csharp" => "c_sharp",
        "jinja" => "jinja2",
        other => other,
    };
    name.to_string()
}

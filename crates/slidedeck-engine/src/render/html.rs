use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd, html};

use super::{DefaultHighlighter, Highlighter, MarkupRenderer, code::render_code_block};

/// Fence language rendered as a diagram container unless configured otherwise.
pub const DEFAULT_DIAGRAM_LANGUAGE: &str = "mermaid";

/// Markdown to HTML renderer backed by `pulldown-cmark`.
///
/// Code blocks are pulled out of the event stream and rendered by
/// [`render_code_block`] with the configured highlighter.
#[derive(Debug, Clone)]
pub struct HtmlRenderer<H = DefaultHighlighter> {
    highlighter: H,
    diagram_language: String,
    options: Options,
}

/// A code block being collected from the event stream.
struct OpenCode {
    info: String,
    text: String,
}

impl HtmlRenderer<DefaultHighlighter> {
    pub fn new() -> Self {
        Self::with_highlighter(DefaultHighlighter::default())
    }
}

impl Default for HtmlRenderer<DefaultHighlighter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Highlighter> HtmlRenderer<H> {
    pub fn with_highlighter(highlighter: H) -> Self {
        Self {
            highlighter,
            diagram_language: DEFAULT_DIAGRAM_LANGUAGE.to_string(),
            options: Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS,
        }
    }

    /// Set the fence language emitted as an inert diagram container.
    pub fn with_diagram_language(mut self, language: impl Into<String>) -> Self {
        self.diagram_language = language.into();
        self
    }
}

impl<H: Highlighter> MarkupRenderer for HtmlRenderer<H> {
    fn render(&self, segment: &str) -> String {
        let mut events = vec![];
        let mut open: Option<OpenCode> = None;

        for event in Parser::new_ext(segment, self.options) {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let info = match kind {
                        CodeBlockKind::Fenced(info) => info.to_string(),
                        CodeBlockKind::Indented => String::new(),
                    };
                    open = Some(OpenCode {
                        info,
                        text: String::new(),
                    });
                }
                Event::End(TagEnd::CodeBlock) => {
                    if let Some(block) = open.take() {
                        let mut rendered = render_code_block(
                            &block.info,
                            &block.text,
                            &self.highlighter,
                            &self.diagram_language,
                        );
                        rendered.push('\n');
                        events.push(Event::Html(rendered.into()));
                    }
                }
                Event::Text(text) => match open.as_mut() {
                    Some(block) => block.text.push_str(&text),
                    None => events.push(Event::Text(text)),
                },
                other => events.push(other),
            }
        }

        let mut out = String::new();
        html::push_html(&mut out, events.into_iter());
        out
    }
}

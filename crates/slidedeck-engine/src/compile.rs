//! The document-to-deck pipeline.

use crate::analysis::{analyze, classify};
use crate::models::{Deck, Frontmatter, Slide};
use crate::parsing::{
    ContentChunk, attach_frontmatter, extract_notes, split_chunks, split_global_meta, split_steps,
};
use crate::render::{HtmlRenderer, MarkupRenderer};

/// Compile deck text with the default HTML renderer.
///
/// Total over all inputs: any string yields a deck with at least one slide.
pub fn compile(text: &str) -> Deck {
    compile_with(text, &HtmlRenderer::new())
}

/// Compile deck text, rendering every step with `renderer`.
pub fn compile_with<R: MarkupRenderer + ?Sized>(text: &str, renderer: &R) -> Deck {
    let chunks = split_chunks(text);
    let (meta, start) = split_global_meta(&chunks);
    let content = attach_frontmatter(chunks[start..].iter().map(String::as_str));
    log::debug!(
        "split deck into {} chunks, {} with content",
        chunks.len(),
        content.len()
    );

    let mut slides: Vec<Slide> = content
        .into_iter()
        .enumerate()
        .map(|(index, chunk)| build_slide(index, chunk, renderer))
        .collect();

    if slides.is_empty() {
        log::info!("no slide content found, rendering whole document as one slide");
        slides.push(Slide::new(
            0,
            text.to_string(),
            None,
            Frontmatter::new(),
            vec![renderer.render(text)],
        ));
    }

    infer_layouts(&mut slides);
    Deck { meta, slides }
}

/// Notes, then steps, then an independent render per step.
fn build_slide<R: MarkupRenderer + ?Sized>(
    index: usize,
    chunk: ContentChunk,
    renderer: &R,
) -> Slide {
    let (raw_content, notes) = extract_notes(&chunk.text);
    let steps = split_steps(&raw_content)
        .iter()
        .map(|segment| renderer.render(segment.trim()))
        .collect();
    Slide::new(index, raw_content, notes, chunk.frontmatter, steps)
}

/// Fill in `layout` for slides that do not declare one.
fn infer_layouts(slides: &mut [Slide]) {
    let total = slides.len();
    for slide in slides.iter_mut().filter(|s| s.frontmatter.layout().is_none()) {
        let layout = classify(&analyze(&slide.raw_content), slide.index, total);
        slide.frontmatter.insert(Frontmatter::LAYOUT, layout.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Renderer that echoes its input, so structure can be checked without HTML.
    struct Echo;

    impl MarkupRenderer for Echo {
        fn render(&self, segment: &str) -> String {
            format!("[{segment}]")
        }
    }

    #[test]
    fn plain_document_is_one_slide() {
        let deck = compile_with("\n# Hello\n\nWorld\n", &Echo);
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.slides[0].raw_content, "# Hello\n\nWorld");
        assert_eq!(deck.slides[0].steps, vec!["[# Hello\n\nWorld]"]);
        assert_eq!(deck.meta.title, "Untitled");
    }

    #[test]
    fn steps_render_independently() {
        let deck = compile_with("- a\n<!-- pause -->\n- b", &Echo);
        let slide = &deck.slides[0];
        assert_eq!(slide.total_steps, 2);
        assert_eq!(slide.steps, vec!["[- a]", "[- b]"]);
        assert_eq!(slide.rendered_full, "[- a][- b]");
    }

    #[test]
    fn notes_are_removed_before_steps() {
        let deck = compile_with("a\n<!-- pause -->\nb\n<!-- say hi -->", &Echo);
        let slide = &deck.slides[0];
        assert_eq!(slide.notes.as_deref(), Some("say hi"));
        assert_eq!(slide.raw_content, "a\n<!-- pause -->\nb");
        assert_eq!(slide.total_steps, 2);
    }

    #[test]
    fn trailing_pause_becomes_an_empty_step() {
        let deck = compile_with("a\n<!-- pause -->", &Echo);
        let slide = &deck.slides[0];
        assert_eq!(slide.notes, None);
        assert_eq!(slide.steps, vec!["[a]", "[]"]);
    }

    #[test]
    fn metadata_only_document_falls_back_to_whole_text() {
        let text = "layout: cover\n---\nbg: red\n";
        let deck = compile_with(text, &Echo);
        assert_eq!(deck.len(), 1);
        let slide = &deck.slides[0];
        assert_eq!(slide.raw_content, text);
        assert_eq!(slide.total_steps, 1);
        assert_eq!(slide.frontmatter.len(), 1);
        assert!(slide.frontmatter.layout().is_some());
    }

    #[test]
    fn empty_document_still_has_a_slide() {
        let deck = compile_with("", &Echo);
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.slides[0].steps, vec!["[]"]);
        assert_eq!(deck.slides[0].layout(), "center");
    }

    #[test]
    fn declared_layout_is_kept() {
        let deck = compile_with("layout: two-cols\n---\n# Hello", &Echo);
        assert_eq!(deck.slides[0].layout(), "two-cols");
    }

    #[test]
    fn indexes_follow_content_chunks() {
        let deck = compile_with("# A\n---\n\n---\nlayout: center\n---\n# B\n---\n# C", &Echo);
        let indexes: Vec<usize> = deck.slides.iter().map(|s| s.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
        assert_eq!(deck.slides[1].raw_content, "# B");
    }
}

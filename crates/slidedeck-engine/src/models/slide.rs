use serde::Serialize;

use super::Frontmatter;
use crate::analysis::Layout;

/// One presentable unit of a deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Zero-based position in document order.
    pub index: usize,
    /// Slide markup after notes stripping, before step splitting.
    pub raw_content: String,
    /// Speaker-only text taken from a trailing comment.
    pub notes: Option<String>,
    pub frontmatter: Frontmatter,
    /// Rendered fragment per reveal step. Never empty.
    pub steps: Vec<String>,
    pub total_steps: usize,
    /// All steps concatenated: the fully revealed slide.
    pub rendered_full: String,
}

impl Slide {
    /// Assemble a slide from its rendered steps. `steps` must not be empty.
    pub fn new(
        index: usize,
        raw_content: String,
        notes: Option<String>,
        frontmatter: Frontmatter,
        steps: Vec<String>,
    ) -> Self {
        debug_assert!(!steps.is_empty(), "a slide always has at least one step");
        let rendered_full = steps.concat();
        Self {
            index,
            raw_content,
            notes,
            frontmatter,
            total_steps: steps.len(),
            steps,
            rendered_full,
        }
    }

    /// Declared or inferred layout name, `default` when neither is present.
    pub fn layout(&self) -> &str {
        self.frontmatter
            .layout()
            .unwrap_or(Layout::Default.as_str())
    }

    /// Whether a frontmatter key is set to the literal `true`.
    pub fn flag(&self, key: &str) -> bool {
        self.frontmatter.get(key) == Some("true")
    }

    /// Fragments visible once `step` has been revealed (cumulative).
    ///
    /// Out-of-range steps show the whole slide.
    pub fn visible_steps(&self, step: usize) -> &[String] {
        let end = step.saturating_add(1).min(self.steps.len());
        &self.steps[..end]
    }

    pub fn has_notes(&self) -> bool {
        self.notes.is_some()
    }
}

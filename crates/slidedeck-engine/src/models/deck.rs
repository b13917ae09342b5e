use serde::Serialize;

use super::{DocumentMeta, Slide};

/// A compiled deck: document metadata plus slides in document order.
///
/// Built fresh by every compile and handed off whole; the compiler keeps no
/// reference to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    pub meta: DocumentMeta,
    pub slides: Vec<Slide>,
}

impl Deck {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Compiled decks always hold at least one slide; this is only true for
    /// hand-built values.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn title(&self) -> &str {
        &self.meta.title
    }

    /// Reveal steps across the whole deck.
    pub fn total_steps(&self) -> usize {
        self.slides.iter().map(|s| s.total_steps).sum()
    }
}

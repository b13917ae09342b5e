//! Presenter position over a compiled deck.
//!
//! The compiler never validates indices handed back by a presentation layer
//! or sync transport; these helpers are for those consumers.

use serde::{Deserialize, Serialize};

use crate::models::Deck;

/// A `(slide, step)` pair indexing into a [`Deck`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub slide: usize,
    pub step: usize,
}

impl Position {
    pub fn new(slide: usize, step: usize) -> Self {
        Self { slide, step }
    }
}

impl Deck {
    /// Clamp an externally supplied position into this deck.
    pub fn clamp(&self, slide: usize, step: usize) -> Position {
        let slide = slide.min(self.len().saturating_sub(1));
        let last_step = self
            .slide(slide)
            .map_or(0, |s| s.total_steps.saturating_sub(1));
        Position::new(slide, step.min(last_step))
    }

    pub fn first(&self) -> Position {
        Position::default()
    }

    /// First step of the last slide.
    pub fn last(&self) -> Position {
        Position::new(self.len().saturating_sub(1), 0)
    }

    /// Reveal the next step, or move to the next slide's first step.
    /// Stays put at the end of the deck.
    pub fn next(&self, pos: Position) -> Position {
        let pos = self.clamp(pos.slide, pos.step);
        let steps = self.slide(pos.slide).map_or(1, |s| s.total_steps);
        if pos.step + 1 < steps {
            Position::new(pos.slide, pos.step + 1)
        } else if pos.slide + 1 < self.len() {
            Position::new(pos.slide + 1, 0)
        } else {
            pos
        }
    }

    /// Hide the last step, or move back to the previous slide fully revealed.
    pub fn prev(&self, pos: Position) -> Position {
        let pos = self.clamp(pos.slide, pos.step);
        if pos.step > 0 {
            Position::new(pos.slide, pos.step - 1)
        } else if pos.slide > 0 {
            let slide = pos.slide - 1;
            let step = self
                .slide(slide)
                .map_or(0, |s| s.total_steps.saturating_sub(1));
            Position::new(slide, step)
        } else {
            pos
        }
    }
}

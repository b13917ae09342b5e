use serde::Serialize;
use std::fmt;

use super::ContentProfile;

/// Layouts the classifier can infer. Authors may declare any other name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Title-style slide at either end of the deck.
    Cover,
    /// Light content, centred.
    Center,
    Default,
}

impl Layout {
    pub fn as_str(self) -> &'static str {
        match self {
            Layout::Cover => "cover",
            Layout::Center => "center",
            Layout::Default => "default",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Most text a cover or light centred slide may carry.
const LIGHT_TEXT_LIMIT: usize = 200;

/// Pick a layout for slide `index` of a `total`-slide deck.
///
/// Rules are tried in order and the first match wins.
pub fn classify(p: &ContentProfile, index: usize, total: usize) -> Layout {
    let has_heading = p.headings > 0;
    let at_edge = index == 0 || index + 1 == total;

    if !has_heading && p.total_blocks == 0 {
        return Layout::Center;
    }

    if at_edge
        && has_heading
        && p.total_blocks <= 3
        && p.text_length < LIGHT_TEXT_LIMIT
        && p.table_blocks == 0
    {
        return Layout::Cover;
    }

    // Nothing but quotes.
    if p.blockquote_blocks > 0
        && p.paragraph_blocks == 0
        && p.code_blocks == 0
        && p.list_items == 0
        && p.table_blocks == 0
    {
        return Layout::Center;
    }

    if has_heading
        && p.total_blocks <= 2
        && p.text_length < LIGHT_TEXT_LIMIT
        && p.table_blocks == 0
        && p.list_items <= 3
    {
        return Layout::Center;
    }

    if has_heading && p.total_blocks == 0 {
        return Layout::Center;
    }

    Layout::Default
}

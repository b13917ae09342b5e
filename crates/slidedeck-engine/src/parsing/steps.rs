use regex::Regex;
use std::sync::OnceLock;

use super::fence::split_outside_fences;

/// The word inside a reveal-marker comment.
pub const PAUSE_WORD: &str = "pause";

fn pause_regex() -> &'static Regex {
    static PAUSE: OnceLock<Regex> = OnceLock::new();
    PAUSE.get_or_init(|| Regex::new(r"^\s*<!--\s*pause\s*-->\s*$").expect("Invalid pause regex"))
}

/// Whether a line is a standalone `<!-- pause -->` reveal marker.
pub fn is_pause_marker(line: &str) -> bool {
    pause_regex().is_match(line)
}

/// Split slide content into reveal segments at pause markers outside fences.
///
/// Always returns at least one segment; marker lines are dropped.
pub fn split_steps(content: &str) -> Vec<String> {
    split_outside_fences(content, is_pause_marker)
}

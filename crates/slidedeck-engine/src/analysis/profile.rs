use serde::Serialize;

use crate::parsing::{FenceScanner, FenceState, is_pause_marker};

/// Block-level fingerprint of a slide's raw Markdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ContentProfile {
    pub headings: usize,
    pub paragraph_blocks: usize,
    pub code_blocks: usize,
    /// Lines inside fenced blocks, summed over all blocks.
    pub code_lines: usize,
    pub list_items: usize,
    pub blockquote_blocks: usize,
    pub table_blocks: usize,
    /// UTF-16 code units of paragraph and blockquote text, trimmed per line,
    /// so an emoji outside the BMP counts as two.
    pub text_length: usize,
    /// Paragraphs + code blocks + one unit for any list items + quote blocks
    /// + table blocks.
    pub total_blocks: usize,
}

/// Run-continuation state for multi-line blocks.
#[derive(Debug, Default)]
struct Runs {
    list: bool,
    quote: bool,
    table: bool,
}

/// Fingerprint a slide's raw Markdown, line by line.
///
/// A fenced block counts once however long it is. Adjacent quote or table
/// lines form one block; list items are tallied one by one but all of them
/// together count as a single block. Headings and pause markers are not
/// blocks. A blank line ends any run.
pub fn analyze(raw: &str) -> ContentProfile {
    let mut p = ContentProfile::default();
    let mut runs = Runs::default();
    let mut fence = FenceScanner::new();

    for line in raw.split('\n') {
        let state = fence.advance(line);
        if FenceScanner::is_fence(line) {
            if state == FenceState::Inside {
                p.code_blocks += 1;
            }
            continue;
        }
        if state == FenceState::Inside {
            p.code_lines += 1;
            continue;
        }

        let t = line.trim();
        if t.is_empty() {
            runs = Runs::default();
            continue;
        }
        if is_pause_marker(t) {
            continue;
        }

        if is_heading(t) {
            p.headings += 1;
        } else if is_table_row(t) {
            if !runs.table {
                p.table_blocks += 1;
                runs.table = true;
            }
        } else if is_list_item(t) {
            p.list_items += 1;
            runs.list = true;
        } else if t.starts_with("> ") {
            if !runs.quote {
                p.blockquote_blocks += 1;
                runs.quote = true;
            }
            p.text_length += t.encode_utf16().count();
        } else {
            p.paragraph_blocks += 1;
            p.text_length += t.encode_utf16().count();
        }
    }

    p.total_blocks = p.paragraph_blocks
        + p.code_blocks
        + usize::from(p.list_items > 0)
        + p.blockquote_blocks
        + p.table_blocks;
    p
}

/// `#` to `######` followed by a space.
fn is_heading(t: &str) -> bool {
    let hashes = t.bytes().take_while(|&b| b == b'#').count();
    (1..=6).contains(&hashes) && t[hashes..].starts_with(' ')
}

/// A pipe, at least one character, then another pipe.
fn is_table_row(t: &str) -> bool {
    t.strip_prefix('|')
        .is_some_and(|rest| rest.chars().skip(1).any(|c| c == '|'))
}

/// `-`, `*` or `+` bullets and `1.` style ordinals, each followed by a space.
fn is_list_item(t: &str) -> bool {
    if ["- ", "* ", "+ "].iter().any(|b| t.starts_with(b)) {
        return true;
    }
    let digits = t.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && t[digits..].starts_with(". ")
}

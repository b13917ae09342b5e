use super::steps::PAUSE_WORD;

const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";

/// Split a trailing `<!-- ... -->` speaker note off a slide chunk.
///
/// The comment must close at the very end of the chunk (trailing whitespace
/// allowed) and opens at the last `<!--` before that close, so the note never
/// spans another comment. A trailing `<!-- pause -->` is left in place for
/// step segmentation. Returns the trimmed remaining content and the trimmed
/// note text.
pub fn extract_notes(chunk: &str) -> (String, Option<String>) {
    match trailing_comment(chunk) {
        Some((start, inner)) if inner.trim() != PAUSE_WORD => (
            chunk[..start].trim().to_string(),
            Some(inner.trim().to_string()),
        ),
        _ => (chunk.to_string(), None),
    }
}

/// Byte offset of the trailing comment's opener and the text between the
/// delimiters.
fn trailing_comment(chunk: &str) -> Option<(usize, &str)> {
    let body = chunk.trim_end();
    let close = body.strip_suffix(COMMENT_CLOSE)?.len();
    let open = body[..close].rfind(COMMENT_OPEN)?;
    Some((open, &body[open + COMMENT_OPEN.len()..close]))
}

use super::fence::split_outside_fences;

/// The slide delimiter token.
pub const DELIMITER: &str = "---";

/// Split a document into top-level chunks at `---` lines outside fences.
///
/// Yields one more chunk than there are qualifying delimiter lines; chunks
/// may be empty.
pub fn split_chunks(text: &str) -> Vec<String> {
    split_outside_fences(text, is_delimiter)
}

pub fn is_delimiter(line: &str) -> bool {
    line.trim() == DELIMITER
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::no_delimiters("# Title\n\nbody", 1)]
    #[case::one("a\n---\nb", 2)]
    #[case::leading_global_block("---\ntitle: x\n---\n# One", 3)]
    #[case::trailing("a\n---", 2)]
    #[case::padded("a\n  ---  \nb", 2)]
    #[case::not_exact("a\n----\nb\n--- x", 1)]
    #[case::inside_fence("```yaml\n---\nkey: v\n---\n```", 1)]
    #[case::empty("", 1)]
    fn chunk_count_is_delimiters_plus_one(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(split_chunks(text).len(), expected);
    }

    #[test]
    fn delimiter_lines_are_dropped() {
        assert_eq!(split_chunks("a\n---\nb\n---\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn fenced_content_survives_unchanged() {
        let text = "```md\n---\n<!-- pause -->\n```";
        assert_eq!(split_chunks(text), vec![text]);
    }
}

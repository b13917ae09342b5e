use regex::Regex;
use std::sync::OnceLock;

use crate::models::{DocumentMeta, Frontmatter};

fn key_line_regex() -> &'static Regex {
    static KEY_LINE: OnceLock<Regex> = OnceLock::new();
    KEY_LINE.get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+\s*:").expect("Invalid key line regex"))
}

fn key_value_regex() -> &'static Regex {
    static KEY_VALUE: OnceLock<Regex> = OnceLock::new();
    KEY_VALUE.get_or_init(|| {
        Regex::new(r"^([A-Za-z0-9_-]+)\s*:\s*(.+)").expect("Invalid key/value regex")
    })
}

/// Whether every non-blank line of `text` looks like `key: value`.
///
/// Text with no non-blank lines is never metadata. Prose where each line
/// happens to start with `word:` is accepted too; that is a known limitation
/// of the heuristic.
pub fn is_metadata_chunk(text: &str) -> bool {
    let mut lines = text.split('\n').filter(|l| !l.trim().is_empty()).peekable();
    lines.peek().is_some() && lines.all(|l| key_line_regex().is_match(l))
}

/// Parse `key: value` lines. Non-matching lines are skipped silently and a
/// repeated key keeps its last value.
pub fn parse_metadata(text: &str) -> Frontmatter {
    text.split('\n')
        .filter_map(|line| key_value_regex().captures(line))
        .map(|caps| (caps[1].to_string(), caps[2].trim().to_string()))
        .collect()
}

/// Pull the global metadata block off the front of the chunk list.
///
/// Returns the document metadata and the index of the first chunk that takes
/// part in slide construction. The global block exists only when there are
/// more than two chunks and the first one is blank (the document opened
/// with a delimiter).
pub fn split_global_meta(chunks: &[String]) -> (DocumentMeta, usize) {
    if chunks.len() > 2 && chunks[0].trim().is_empty() {
        let meta = DocumentMeta::from_frontmatter(parse_metadata(&chunks[1]));
        (meta, 2)
    } else {
        (DocumentMeta::default(), 0)
    }
}

/// A content chunk paired with the per-slide metadata that preceded it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentChunk {
    pub frontmatter: Frontmatter,
    /// Trimmed chunk text.
    pub text: String,
}

/// Iteration state for attaching metadata chunks to the content after them.
#[derive(Debug, Default)]
struct ChunkWalk {
    pending: Option<Frontmatter>,
    out: Vec<ContentChunk>,
}

impl ChunkWalk {
    fn push(mut self, chunk: &str) -> Self {
        let chunk = chunk.trim();
        if chunk.is_empty() {
            return self;
        }
        if is_metadata_chunk(chunk) {
            // Consecutive metadata chunks: the last one wins.
            self.pending = Some(parse_metadata(chunk));
        } else {
            self.out.push(ContentChunk {
                frontmatter: self.pending.take().unwrap_or_default(),
                text: chunk.to_string(),
            });
        }
        self
    }
}

/// Classify chunks as metadata or content and attach each metadata chunk to
/// the next content chunk. Blank chunks are skipped; trailing metadata with
/// no content after it is discarded.
pub fn attach_frontmatter<'a>(chunks: impl IntoIterator<Item = &'a str>) -> Vec<ContentChunk> {
    chunks
        .into_iter()
        .fold(ChunkWalk::default(), ChunkWalk::push)
        .out
}

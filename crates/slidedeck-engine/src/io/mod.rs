use std::fs;
use std::path::{Path, PathBuf};

use crate::models::Deck;
use crate::render::{HtmlRenderer, MarkupRenderer};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid talks directory: {0}")]
    InvalidTalksDir(PathBuf),
}

/// Read a deck file as UTF-8 text
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

/// Read and compile a deck file with the default renderer
pub fn read_deck(path: &Path) -> Result<Deck, IoError> {
    read_deck_with(path, &HtmlRenderer::new())
}

/// Read and compile a deck file with a custom renderer
pub fn read_deck_with<R: MarkupRenderer + ?Sized>(
    path: &Path,
    renderer: &R,
) -> Result<Deck, IoError> {
    let text = read_file(path)?;
    log::info!("compiling deck {}", path.display());
    Ok(crate::compile_with(&text, renderer))
}

/// List the Markdown decks directly inside a talks directory, sorted by path
pub fn scan_decks(talks_dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !talks_dir.is_dir() {
        return Err(IoError::InvalidTalksDir(talks_dir.to_path_buf()));
    }

    let mut decks = Vec::new();
    for entry in fs::read_dir(talks_dir)? {
        let path = entry?.path();
        if path.is_file()
            && let Some(ext) = path.extension()
            && ext == "md"
        {
            decks.push(path);
        }
    }
    decks.sort();
    Ok(decks)
}

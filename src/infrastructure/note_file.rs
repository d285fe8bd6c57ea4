// src/infrastructure/note_file.rs
use crate::application::note_store::validate_notes;
use crate::domain::Note;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Read a JSON note list and check its invariants.
pub fn load_notes(path: impl AsRef<Path>) -> Result<Vec<Note>> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read notes file {}", path.as_ref().display()))?;
    let notes = parse_notes(&content)?;
    debug!(count = notes.len(), path = %path.as_ref().display(), "Loaded notes");
    Ok(notes)
}

/// Like [`load_notes`], but a missing file is an empty list.
pub fn load_notes_or_empty(path: impl AsRef<Path>) -> Result<Vec<Note>> {
    if path.as_ref().exists() {
        load_notes(path)
    } else {
        Ok(Vec::new())
    }
}

pub fn parse_notes(json: &str) -> Result<Vec<Note>> {
    let notes: Vec<Note> = serde_json::from_str(json).context("Failed to parse notes JSON")?;
    validate_notes(&notes)?;
    Ok(notes)
}

pub fn to_json(notes: &[Note]) -> Result<String> {
    serde_json::to_string_pretty(notes).context("Failed to serialize notes")
}

pub fn save_notes(path: impl AsRef<Path>, notes: &[Note]) -> Result<()> {
    std::fs::write(path.as_ref(), to_json(notes)?)
        .with_context(|| format!("Failed to write notes file {}", path.as_ref().display()))
}

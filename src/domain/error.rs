// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),
    #[error("Duplicate note id: {0}")]
    DuplicateNote(String),
    #[error("Invalid note: {0}")]
    InvalidNote(String),
    #[error("Generation failed: {0}")]
    GenerationFailed(String),
    #[error("Unknown sort criterion: {0}")]
    UnknownSortCriterion(String),
    #[error("Export failed: {0}")]
    ExportFailed(String),
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),
}

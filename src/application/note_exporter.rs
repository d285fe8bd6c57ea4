// src/application/note_exporter.rs
use crate::domain::{DomainError, Note};
use std::path::PathBuf;

/// Turns the full note list into a document.
pub trait NoteExporter {
    fn export(&mut self, notes: &[Note]) -> Result<PathBuf, DomainError>;
}

/// Emitted when the user asks for an export. Always carries the unfiltered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRequested {
    pub notes: Vec<Note>,
}

impl ExportRequested {
    pub fn send<E: NoteExporter>(&self, exporter: &mut E) -> Result<PathBuf, DomainError> {
        exporter.export(&self.notes)
    }
}

// src/application/clipboard.rs
use crate::domain::{DomainError, Note};
use crate::util::text::note_to_plain_text;
use tracing::{debug, warn};

/// Write-only text clipboard.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), DomainError>;
}

/// Copy a note as plain text. Failures are logged and reported as `false`.
pub fn copy_note<C: Clipboard>(clipboard: &mut C, note: &Note) -> bool {
    match clipboard.write_text(&note_to_plain_text(note)) {
        Ok(()) => {
            debug!(section_id = %note.section_id, "Copied note to clipboard");
            true
        }
        Err(e) => {
            warn!(section_id = %note.section_id, error = %e, "Failed to copy note to clipboard");
            false
        }
    }
}

// src/application/note_store.rs
use crate::application::note_card::CardEvent;
use crate::constants::MAX_IMPORTANCE;
use crate::domain::{DomainError, Note, NotePatch};
use std::collections::HashSet;
use tracing::debug;

/// In-memory ordered note list.
///
/// Every mutation builds a new list and swaps it in whole; no caller ever gets
/// a mutable reference into the stored notes.
#[derive(Debug, Clone, Default)]
pub struct NoteStore {
    notes: Vec<Note>,
    revision: u64,
}

impl NoteStore {
    pub fn new(notes: Vec<Note>) -> Result<Self, DomainError> {
        validate_notes(&notes)?;
        Ok(Self { notes, revision: 0 })
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn snapshot(&self) -> Vec<Note> {
        self.notes.clone()
    }

    /// Incremented on every replacement.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn get(&self, section_id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.section_id == section_id)
    }

    pub fn contains(&self, section_id: &str) -> bool {
        self.get(section_id).is_some()
    }

    /// Swap in a whole new list.
    pub fn replace(&mut self, notes: Vec<Note>) -> Result<(), DomainError> {
        validate_notes(&notes)?;
        debug!(count = notes.len(), revision = self.revision + 1, "Replacing note list");
        self.notes = notes;
        self.revision += 1;
        Ok(())
    }

    /// Append notes whose ids are not yet present. Returns how many were added.
    pub fn append(&mut self, incoming: Vec<Note>) -> Result<usize, DomainError> {
        let mut next = self.snapshot();
        let mut known: HashSet<String> = next.iter().map(|n| n.section_id.clone()).collect();
        let mut added = 0;
        for note in incoming {
            if known.insert(note.section_id.clone()) {
                next.push(note);
                added += 1;
            } else {
                debug!(section_id = %note.section_id, "Skipping already present note");
            }
        }
        self.replace(next)?;
        Ok(added)
    }

    pub fn update(&mut self, section_id: &str, patch: &NotePatch) -> Result<(), DomainError> {
        let next = with_update(&self.notes, section_id, patch)?;
        self.replace(next)
    }

    pub fn delete(&mut self, section_id: &str) -> Result<(), DomainError> {
        let next = without_note(&self.notes, section_id)?;
        self.replace(next)
    }

    pub fn apply(&mut self, event: &CardEvent) -> Result<(), DomainError> {
        match event {
            CardEvent::Update { section_id, patch } => self.update(section_id, patch),
            CardEvent::Delete { section_id } => self.delete(section_id),
        }
    }
}

/// Check id uniqueness and the importance range.
pub fn validate_notes(notes: &[Note]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for note in notes {
        if !seen.insert(note.section_id.as_str()) {
            return Err(DomainError::DuplicateNote(note.section_id.clone()));
        }
        if note.importance > MAX_IMPORTANCE {
            return Err(DomainError::InvalidNote(format!(
                "{}: importance {} exceeds {}",
                note.section_id, note.importance, MAX_IMPORTANCE
            )));
        }
    }
    Ok(())
}

/// New list with `patch` applied to the note identified by `section_id`.
pub fn with_update(
    notes: &[Note],
    section_id: &str,
    patch: &NotePatch,
) -> Result<Vec<Note>, DomainError> {
    let mut found = false;
    let next = notes
        .iter()
        .map(|note| {
            let mut note = note.clone();
            if note.section_id == section_id {
                note.apply(patch);
                found = true;
            }
            note
        })
        .collect();
    if found {
        Ok(next)
    } else {
        Err(DomainError::NoteNotFound(section_id.to_string()))
    }
}

/// New list without the note identified by `section_id`; everything else keeps its order.
pub fn without_note(notes: &[Note], section_id: &str) -> Result<Vec<Note>, DomainError> {
    if !notes.iter().any(|n| n.section_id == section_id) {
        return Err(DomainError::NoteNotFound(section_id.to_string()));
    }
    Ok(notes
        .iter()
        .filter(|n| n.section_id != section_id)
        .cloned()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> NoteStore {
        NoteStore::new(vec![
            Note::new("a", "A").with_importance(1),
            Note::new("b", "B").with_importance(2),
            Note::new("c", "C").with_importance(3),
        ])
        .unwrap()
    }

    fn ids(store: &NoteStore) -> Vec<&str> {
        store.notes().iter().map(|n| n.section_id.as_str()).collect()
    }

    #[test]
    fn given_duplicate_ids_when_creating_then_returns_error() {
        let result = NoteStore::new(vec![Note::new("a", "A"), Note::new("a", "Again")]);

        assert!(matches!(result, Err(DomainError::DuplicateNote(id)) if id == "a"));
    }

    #[test]
    fn given_out_of_range_importance_when_replacing_then_returns_error() {
        let mut note = Note::new("a", "A");
        note.importance = 6;

        let result = store().replace(vec![note]);

        assert!(matches!(result, Err(DomainError::InvalidNote(_))));
    }

    #[test]
    fn given_existing_id_when_deleting_then_removes_only_that_note() {
        let mut store = store();

        store.delete("b").unwrap();

        assert_eq!(ids(&store), vec!["a", "c"]);
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn given_unknown_id_when_deleting_then_list_is_unchanged() {
        let mut store = store();

        let result = store.delete("zzz");

        assert_eq!(result, Err(DomainError::NoteNotFound("zzz".to_string())));
        assert_eq!(ids(&store), vec!["a", "b", "c"]);
        assert_eq!(store.revision(), 0);
    }

    #[test]
    fn given_patch_when_updating_then_replaces_only_target() {
        let mut store = store();

        store
            .update("c", &NotePatch::content(vec!["new".to_string()]))
            .unwrap();

        assert_eq!(store.get("c").unwrap().content, vec!["new"]);
        assert!(store.get("a").unwrap().content.is_empty());
        assert_eq!(ids(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn given_overlapping_ids_when_appending_then_skips_known_notes() {
        let mut store = store();

        let added = store
            .append(vec![Note::new("c", "Other C"), Note::new("d", "D")])
            .unwrap();

        assert_eq!(added, 1);
        assert_eq!(ids(&store), vec!["a", "b", "c", "d"]);
        assert_eq!(store.get("c").unwrap().section_title, "C");
    }

    #[test]
    fn given_delete_event_when_applying_then_removes_note() {
        let mut store = store();

        store
            .apply(&CardEvent::Delete {
                section_id: "a".to_string(),
            })
            .unwrap();

        assert_eq!(ids(&store), vec!["b", "c"]);
    }
}

// src/application/note_filter.rs
use crate::domain::Note;
use crate::util::text::contains_ignore_case;
use std::collections::HashSet;

/// Search text and selected tags applied to a note list.
///
/// An empty (after trimming) search and an empty tag set both mean "pass all".
/// The two conditions combine with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub search: String,
    pub selected_tags: HashSet<String>,
}

impl NoteFilter {
    pub fn new(search: impl Into<String>, selected_tags: HashSet<String>) -> Self {
        Self {
            search: search.into(),
            selected_tags,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.selected_tags.is_empty()
    }

    /// Return the matching notes in input order. The input is never modified.
    pub fn apply(&self, notes: &[Note]) -> Vec<Note> {
        filter_notes(notes, &self.search, &self.selected_tags)
    }
}

fn matches_search(note: &Note, query_lower: &str) -> bool {
    if query_lower.is_empty() {
        return true;
    }
    contains_ignore_case(&note.section_title, query_lower)
        || note
            .content
            .iter()
            .any(|line| contains_ignore_case(line, query_lower))
}

fn matches_tags(note: &Note, selected: &HashSet<String>) -> bool {
    selected.is_empty() || note.all_tags().any(|tag| selected.contains(tag))
}

/// Keep the notes matching `search` (title or any content line, case-insensitive)
/// and sharing at least one tag with `selected_tags`.
pub fn filter_notes(notes: &[Note], search: &str, selected_tags: &HashSet<String>) -> Vec<Note> {
    let query = search.trim().to_lowercase();
    notes
        .iter()
        .filter(|note| matches_search(note, &query))
        .filter(|note| matches_tags(note, selected_tags))
        .cloned()
        .collect()
}

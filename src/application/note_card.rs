// src/application/note_card.rs
use crate::constants::DELETE_CONFIRM_TIMEOUT_MS;
use crate::domain::{Note, NotePatch};
use crate::util::text::{join_lines, split_lines};
use std::time::{Duration, Instant};
use tracing::debug;

/// Change requested by a card. The owner applies it to the note list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardEvent {
    Update { section_id: String, patch: NotePatch },
    Delete { section_id: String },
}

impl CardEvent {
    pub fn section_id(&self) -> &str {
        match self {
            CardEvent::Update { section_id, .. } | CardEvent::Delete { section_id } => section_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMode {
    Viewing,
    Editing { buffer: String },
}

/// Local state of one rendered note.
///
/// Holds a copy of the last committed note; [`NoteCard::sync`] refreshes it
/// after the owner has applied an event.
#[derive(Debug, Clone)]
pub struct NoteCard {
    note: Note,
    mode: CardMode,
    tag_input: String,
    delete_armed_at: Option<Instant>,
    confirm_window: Duration,
}

impl NoteCard {
    pub fn new(note: Note) -> Self {
        Self::with_confirm_window(note, Duration::from_millis(DELETE_CONFIRM_TIMEOUT_MS))
    }

    pub fn with_confirm_window(note: Note, confirm_window: Duration) -> Self {
        Self {
            note,
            mode: CardMode::Viewing,
            tag_input: String::new(),
            delete_armed_at: None,
            confirm_window,
        }
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn mode(&self) -> &CardMode {
        &self.mode
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, CardMode::Editing { .. })
    }

    /// Replace the committed note with the owner's current copy.
    pub fn sync(&mut self, note: Note) {
        self.note = note;
    }

    pub fn begin_edit(&mut self) {
        self.mode = CardMode::Editing {
            buffer: join_lines(&self.note.content),
        };
    }

    /// Replace the edit buffer. Ignored while viewing.
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        if let CardMode::Editing { buffer } = &mut self.mode {
            *buffer = text.into();
        }
    }

    pub fn buffer(&self) -> Option<&str> {
        match &self.mode {
            CardMode::Editing { buffer } => Some(buffer),
            CardMode::Viewing => None,
        }
    }

    /// Commit the buffer: blank lines are dropped. Returns `None` while viewing.
    pub fn save(&mut self) -> Option<CardEvent> {
        let CardMode::Editing { buffer } = std::mem::replace(&mut self.mode, CardMode::Viewing)
        else {
            return None;
        };
        Some(CardEvent::Update {
            section_id: self.note.section_id.clone(),
            patch: NotePatch::content(split_lines(&buffer)),
        })
    }

    pub fn cancel(&mut self) {
        self.mode = CardMode::Viewing;
    }

    pub fn press_delete(&mut self) -> Option<CardEvent> {
        self.press_delete_at(Instant::now())
    }

    /// First press arms; a second press before the window closes emits `Delete`.
    ///
    /// The window is measured from the first press and never extended.
    pub fn press_delete_at(&mut self, now: Instant) -> Option<CardEvent> {
        if self.is_delete_armed_at(now) {
            self.delete_armed_at = None;
            debug!(section_id = %self.note.section_id, "Delete confirmed");
            return Some(CardEvent::Delete {
                section_id: self.note.section_id.clone(),
            });
        }
        debug!(section_id = %self.note.section_id, "Delete armed");
        self.delete_armed_at = Some(now);
        None
    }

    pub fn is_delete_armed(&self) -> bool {
        self.is_delete_armed_at(Instant::now())
    }

    pub fn is_delete_armed_at(&self, now: Instant) -> bool {
        self.delete_armed_at
            .is_some_and(|armed| now.saturating_duration_since(armed) < self.confirm_window)
    }

    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    pub fn set_tag_input(&mut self, text: impl Into<String>) {
        self.tag_input = text.into();
    }

    /// Add the pending tag input as a custom tag.
    pub fn submit_tag(&mut self) -> Option<CardEvent> {
        let input = std::mem::take(&mut self.tag_input);
        let event = self.add_tag(&input);
        if event.is_none() {
            self.tag_input = input;
        }
        event
    }

    /// Empty or already present (exact match) tags are ignored.
    pub fn add_tag(&self, tag: &str) -> Option<CardEvent> {
        let tag = tag.trim();
        if tag.is_empty() || self.note.custom_tags().iter().any(|t| t == tag) {
            return None;
        }
        let mut custom_tags = self.note.custom_tags().to_vec();
        custom_tags.push(tag.to_string());
        Some(CardEvent::Update {
            section_id: self.note.section_id.clone(),
            patch: NotePatch::custom_tags(custom_tags),
        })
    }

    pub fn toggle_star(&self) -> CardEvent {
        CardEvent::Update {
            section_id: self.note.section_id.clone(),
            patch: NotePatch::starred(!self.note.is_starred()),
        }
    }
}

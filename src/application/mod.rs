// src/application/mod.rs
pub mod clipboard;
pub mod note_card;
pub mod note_exporter;
pub mod note_filter;
pub mod note_generator;
pub mod note_sorter;
pub mod note_store;
pub mod results_view;
pub mod tag_extractor;
pub mod tag_filter_panel;

pub use clipboard::{copy_note, Clipboard};
pub use note_card::{CardEvent, CardMode, NoteCard};
pub use note_exporter::{ExportRequested, NoteExporter};
pub use note_filter::{filter_notes, NoteFilter};
pub use note_generator::{GenerationMode, GenerationRequest, NoteGenerator};
pub use note_sorter::sort_notes;
pub use note_store::NoteStore;
pub use results_view::{ErrorBanner, NotesResults};
pub use tag_extractor::extract_tags;
pub use tag_filter_panel::{TagEntry, TagFilterPanel};

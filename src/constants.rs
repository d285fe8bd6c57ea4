// src/constants.rs
//
// Application-wide constants shared by the pipeline, the cards and the generator.

/// Highest importance a note may carry. Importance is rendered as this many stars.
pub const MAX_IMPORTANCE: u8 = 5;

/// Fixed reference ordering for the `by_tag` sort.
///
/// A note's key is the smallest index of any of its built-in tags in this list;
/// notes whose tags are all unknown sort after every listed tag.
///
/// Used in: `application/note_sorter.rs`, `infrastructure/markdown_generator.rs`
pub const TAG_PRIORITY: [&str; 6] = ["Definition", "Process", "Equation", "Example", "Term", "Location"];

/// Milliseconds a note card keeps its delete confirmation armed.
///
/// Used in: `application/note_card.rs`, `infrastructure/config.rs`
pub const DELETE_CONFIRM_TIMEOUT_MS: u64 = 3000;

/// Maximum number of topics a generation request accepts.
///
/// Used in: `application/note_generator.rs`
pub const MAX_TOPICS: usize = 5;

/// Length of the hex digest prefix used for generated section ids.
///
/// Used in: `infrastructure/markdown_generator.rs`
pub const SECTION_ID_HEX_LEN: usize = 12;

/// Delay in milliseconds after writing the export file before the browser opens it.
///
/// Used in: `infrastructure/renderer.rs`
pub const BROWSER_LAUNCH_DELAY_MS: u64 = 200;

// src/util/testing.rs

use anyhow::Result;
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{Clipboard, GenerationRequest, NoteGenerator};
use crate::domain::{DomainError, Note};

enum GenerateBehavior {
    Notes(Vec<Note>),
    Failure(String),
}

/// Shared mock generator for testing code that depends on NoteGenerator
///
/// Records every request it receives so tests can assert on what was asked.
///
/// # Examples
///
/// ```
/// use studynotes::util::testing::MockNoteGenerator;
/// use studynotes::domain::Note;
///
/// let generator = MockNoteGenerator::builder()
///     .with_notes(vec![Note::new("s1", "Cells").with_importance(3)])
///     .build();
/// ```
pub struct MockNoteGenerator {
    behavior: GenerateBehavior,
    requests: Vec<GenerationRequest>,
}

impl MockNoteGenerator {
    pub fn builder() -> MockNoteGeneratorBuilder {
        MockNoteGeneratorBuilder::new()
    }

    pub fn requests(&self) -> &[GenerationRequest] {
        &self.requests
    }
}

impl NoteGenerator for MockNoteGenerator {
    fn generate(&mut self, request: &GenerationRequest) -> Result<Vec<Note>, DomainError> {
        self.requests.push(request.clone());
        match &self.behavior {
            GenerateBehavior::Notes(notes) => Ok(notes.clone()),
            GenerateBehavior::Failure(reason) => Err(DomainError::GenerationFailed(reason.clone())),
        }
    }
}

/// Builder for MockNoteGenerator
pub struct MockNoteGeneratorBuilder {
    behavior: GenerateBehavior,
}

impl MockNoteGeneratorBuilder {
    pub fn new() -> Self {
        Self {
            behavior: GenerateBehavior::Notes(Vec::new()),
        }
    }

    /// Return these notes from every generate call
    pub fn with_notes(mut self, notes: Vec<Note>) -> Self {
        self.behavior = GenerateBehavior::Notes(notes);
        self
    }

    /// Fail every generate call with GenerationFailed(reason)
    pub fn with_failure(mut self, reason: &str) -> Self {
        self.behavior = GenerateBehavior::Failure(reason.to_string());
        self
    }

    pub fn build(self) -> MockNoteGenerator {
        MockNoteGenerator {
            behavior: self.behavior,
            requests: Vec::new(),
        }
    }
}

impl Default for MockNoteGeneratorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Clipboard double that keeps written text in memory, or always fails.
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    writes: Vec<String>,
    fail: bool,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            writes: Vec::new(),
            fail: true,
        }
    }

    pub fn writes(&self) -> &[String] {
        &self.writes
    }
}

impl Clipboard for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), DomainError> {
        if self.fail {
            return Err(DomainError::ClipboardUnavailable("recording clipboard set to fail".to_string()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// Small biology note set covering every built-in tag, stars and custom tags.
pub fn sample_notes() -> Vec<Note> {
    vec![
        Note::new("sec-cell", "Cell")
            .with_content(["Basic unit of life", "Enclosed by a membrane"])
            .with_importance(5)
            .with_tags(["Definition", "Term"]),
        Note::new("sec-photo", "Photosynthesis")
            .with_content(["Light reaction", "Calvin cycle"])
            .with_importance(4)
            .with_tags(["Process"]),
        Note::new("sec-rate", "Growth rate")
            .with_content(["r = (N1 - N0) / t"])
            .with_importance(3)
            .with_tags(["Equation"])
            .with_starred(true),
        Note::new("sec-yeast", "Yeast budding")
            .with_content(["For example, Saccharomyces reproduces by budding"])
            .with_importance(2)
            .with_tags(["Example"])
            .with_custom_tags(["exam"]),
        Note::new("sec-amazon", "Amazon basin")
            .with_content(["Located in South America"])
            .with_importance(1)
            .with_tags(["Location"]),
    ]
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["pulldown_cmark", "walkdir"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

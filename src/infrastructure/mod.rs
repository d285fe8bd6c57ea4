// src/infrastructure/mod.rs
pub mod clipboard;
pub mod config;
pub mod markdown_generator;
pub mod note_file;
pub mod renderer;
pub mod source_reader;

pub use clipboard::SystemClipboard;
pub use config::Config;
pub use markdown_generator::MarkdownNoteGenerator;
pub use renderer::HtmlExporter;

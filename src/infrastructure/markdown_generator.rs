// src/infrastructure/markdown_generator.rs
use crate::application::{GenerationRequest, NoteGenerator};
use crate::constants::{MAX_IMPORTANCE, SECTION_ID_HEX_LEN, TAG_PRIORITY};
use crate::domain::{DomainError, Note};
use lazy_static::lazy_static;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use regex::Regex;
use sha2::{Digest, Sha256};
use tracing::{debug, instrument};

lazy_static! {
    static ref DEFINITION_REGEX: Regex = Regex::new(
        r"(?i)\b(is defined as|refers to|is called|is known as|means|definition)\b"
    )
    .expect("Failed to compile definition regex");
    static ref PROCESS_REGEX: Regex =
        Regex::new(r"(?i)\b(steps?|first|then|next|finally|process|stages?|cycle)\b")
            .expect("Failed to compile process regex");
    static ref EQUATION_REGEX: Regex =
        Regex::new(r"[=±×÷]|\$[^$]+\$|\\frac").expect("Failed to compile equation regex");
    static ref EXAMPLE_REGEX: Regex = Regex::new(
        r"(?i)(\be\.g\.|\bfor example\b|\bfor instance\b|\bsuch as\b|\bexamples?\b)"
    )
    .expect("Failed to compile example regex");
    static ref LOCATION_REGEX: Regex = Regex::new(
        r"(?i)\b(located|found in|city|country|continent|region|river|mountain|ocean|basin)\b"
    )
    .expect("Failed to compile location regex");
}

/// Simulated generation service: turns markdown study material into notes.
///
/// Every heading opens a section; paragraphs, list items and code lines under
/// it become content lines. Headings without content produce no note.
/// Built-in tags come from keyword heuristics, bold or inline-code text marks
/// a `Term`.
#[derive(Debug, Clone)]
pub struct MarkdownNoteGenerator {
    options: Options,
}

#[derive(Debug, Default)]
struct Section {
    title: String,
    lines: Vec<String>,
    has_term: bool,
}

impl MarkdownNoteGenerator {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_TASKLISTS);
        Self { options }
    }

    fn parse_sections(&self, text: &str) -> Vec<Section> {
        let mut sections: Vec<Section> = Vec::new();
        let mut current: Option<Section> = None;
        let mut line = String::new();
        let mut heading: Option<String> = None;
        let mut in_code_block = false;

        for event in Parser::new_ext(text, self.options) {
            match event {
                Event::Start(Tag::Heading { .. }) => {
                    flush_line(&mut line, current.as_mut());
                    heading = Some(String::new());
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some(previous) = current.take() {
                        sections.push(previous);
                    }
                    current = Some(Section {
                        title: heading.take().unwrap_or_default().trim().to_string(),
                        ..Default::default()
                    });
                }
                Event::Start(Tag::Paragraph) | Event::Start(Tag::Item) => {
                    flush_line(&mut line, current.as_mut());
                }
                Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Item) => {
                    flush_line(&mut line, current.as_mut());
                }
                Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
                Event::End(TagEnd::CodeBlock) => in_code_block = false,
                Event::Start(Tag::Strong) if heading.is_none() => {
                    if let Some(section) = current.as_mut() {
                        section.has_term = true;
                    }
                }
                Event::Text(text) => {
                    if let Some(title) = heading.as_mut() {
                        title.push_str(&text);
                    } else if in_code_block {
                        if let Some(section) = current.as_mut() {
                            section.lines.extend(
                                text.lines()
                                    .map(str::trim_end)
                                    .filter(|l| !l.trim().is_empty())
                                    .map(str::to_string),
                            );
                        }
                    } else {
                        line.push_str(&text);
                    }
                }
                Event::Code(code) => {
                    if let Some(title) = heading.as_mut() {
                        title.push_str(&code);
                    } else {
                        line.push_str(&code);
                        if let Some(section) = current.as_mut() {
                            section.has_term = true;
                        }
                    }
                }
                Event::SoftBreak | Event::HardBreak => {
                    if let Some(title) = heading.as_mut() {
                        title.push(' ');
                    } else {
                        line.push(' ');
                    }
                }
                _ => {}
            }
        }
        flush_line(&mut line, current.as_mut());
        if let Some(last) = current {
            sections.push(last);
        }
        sections
    }
}

impl Default for MarkdownNoteGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteGenerator for MarkdownNoteGenerator {
    #[instrument(level = "debug", skip(self, request), fields(source = %request.source_name))]
    fn generate(&mut self, request: &GenerationRequest) -> Result<Vec<Note>, DomainError> {
        if request.source_text.trim().is_empty() {
            return Err(DomainError::GenerationFailed(format!(
                "source {} is empty",
                request.source_name
            )));
        }

        let notes: Vec<Note> = self
            .parse_sections(&request.source_text)
            .into_iter()
            .enumerate()
            .filter(|(_, section)| !section.lines.is_empty() && !section.title.is_empty())
            .filter(|(_, section)| request.wants_title(&section.title))
            .map(|(index, section)| build_note(&request.source_name, index, section))
            .collect();

        if notes.is_empty() {
            return Err(DomainError::GenerationFailed(format!(
                "no note sections found in {}",
                request.source_name
            )));
        }
        debug!(count = notes.len(), "Parsed note sections");
        Ok(notes)
    }
}

fn flush_line(line: &mut String, section: Option<&mut Section>) {
    let text = line.trim().to_string();
    line.clear();
    if text.is_empty() {
        return;
    }
    if let Some(section) = section {
        section.lines.push(text);
    }
}

fn build_note(source: &str, index: usize, section: Section) -> Note {
    let tags = classify(&section);
    let importance = estimate_importance(&tags, section.lines.len());
    Note::new(section_id(source, index, &section.title), section.title)
        .with_content(section.lines)
        .with_importance(importance)
        .with_tags(tags)
}

/// Built-in tags in reference order.
pub fn classify_text(title: &str, lines: &[String], has_term: bool) -> Vec<String> {
    let body = format!("{}\n{}", title, lines.join("\n"));
    TAG_PRIORITY
        .iter()
        .filter(|tag| match **tag {
            "Definition" => DEFINITION_REGEX.is_match(&body),
            "Process" => PROCESS_REGEX.is_match(&body),
            "Equation" => EQUATION_REGEX.is_match(&body),
            "Example" => EXAMPLE_REGEX.is_match(&body),
            "Term" => has_term,
            "Location" => LOCATION_REGEX.is_match(&body),
            _ => false,
        })
        .map(|tag| tag.to_string())
        .collect()
}

fn classify(section: &Section) -> Vec<String> {
    classify_text(&section.title, &section.lines, section.has_term)
}

// One point base, one per tag (two for a definition), one per three lines.
fn estimate_importance(tags: &[String], line_count: usize) -> u8 {
    let tag_points: usize = tags
        .iter()
        .map(|t| if t == "Definition" { 2 } else { 1 })
        .sum();
    let score = 1 + tag_points + line_count / 3;
    score.min(MAX_IMPORTANCE as usize) as u8
}

/// `sec-` followed by the leading hex digits of SHA-256 over source, position and title.
pub fn section_id(source: &str, index: usize, title: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(source.as_bytes());
    hasher.update([0u8]);
    hasher.update(index.to_le_bytes());
    hasher.update([0u8]);
    hasher.update(title.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    format!("sec-{}", &digest[..SECTION_ID_HEX_LEN])
}

// src/util/text.rs
use crate::constants::MAX_IMPORTANCE;
use crate::domain::Note;

/// Join content lines into a single editable buffer.
///
/// # Examples
///
/// ```
/// use studynotes::util::text::join_lines;
///
/// let lines = vec!["first".to_string(), "second".to_string()];
/// assert_eq!(join_lines(&lines), "first\nsecond");
/// ```
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

/// Split an edit buffer back into content lines.
///
/// Lines that are empty after trimming are dropped; the remaining lines keep
/// their original text.
///
/// # Examples
///
/// ```
/// use studynotes::util::text::split_lines;
///
/// assert_eq!(split_lines("a\n\n  \nb"), vec!["a", "b"]);
/// ```
pub fn split_lines(buffer: &str) -> Vec<String> {
    buffer
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

/// Case-insensitive substring test. `needle_lower` must already be lowercased.
pub fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Render importance as filled and empty stars, e.g. `★★★☆☆`.
pub fn importance_stars(importance: u8) -> String {
    let filled = importance.min(MAX_IMPORTANCE) as usize;
    let empty = MAX_IMPORTANCE as usize - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// Plain-text form of a note, used for clipboard copies.
pub fn note_to_plain_text(note: &Note) -> String {
    let mut out = note.section_title.clone();
    for line in &note.content {
        out.push_str("\n• ");
        out.push_str(line);
    }
    out
}

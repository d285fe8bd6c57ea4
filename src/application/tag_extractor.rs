// src/application/tag_extractor.rs
use crate::domain::Note;
use std::collections::HashSet;

/// Every distinct built-in and custom tag, in order of first occurrence.
pub fn extract_tags(notes: &[Note]) -> Vec<String> {
    let mut seen = HashSet::new();
    notes
        .iter()
        .flat_map(Note::all_tags)
        .filter(|tag| seen.insert(tag.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_overlapping_tags_when_extracting_then_keeps_first_occurrence_order() {
        let notes = vec![
            Note::new("a", "A").with_tags(["Term", "Example"]),
            Note::new("b", "B")
                .with_tags(["Example", "Definition"])
                .with_custom_tags(["exam", "Term"]),
        ];

        assert_eq!(
            extract_tags(&notes),
            vec!["Term", "Example", "Definition", "exam"]
        );
    }

    #[test]
    fn given_no_notes_when_extracting_then_returns_empty() {
        assert!(extract_tags(&[]).is_empty());
    }
}

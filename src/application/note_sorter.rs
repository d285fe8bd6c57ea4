// src/application/note_sorter.rs
use crate::constants::TAG_PRIORITY;
use crate::domain::{Note, SortCriterion};
use std::cmp::Ordering;

/// Return a sorted copy of `notes`. The sort is stable, so ties keep their input order.
pub fn sort_notes(notes: &[Note], criterion: SortCriterion) -> Vec<Note> {
    let mut sorted = notes.to_vec();
    match criterion {
        SortCriterion::ImportanceDesc => sorted.sort_by(|a, b| b.importance.cmp(&a.importance)),
        SortCriterion::ImportanceAsc => sorted.sort_by(|a, b| a.importance.cmp(&b.importance)),
        SortCriterion::AlphaAsc => sorted.sort_by(|a, b| compare_titles(a, b)),
        SortCriterion::AlphaDesc => sorted.sort_by(|a, b| compare_titles(b, a)),
        SortCriterion::ByTag => sorted.sort_by(|a, b| {
            tag_rank(a)
                .cmp(&tag_rank(b))
                .then_with(|| b.importance.cmp(&a.importance))
        }),
        SortCriterion::StarredFirst => sorted.sort_by(|a, b| {
            b.is_starred()
                .cmp(&a.is_starred())
                .then_with(|| b.importance.cmp(&a.importance))
        }),
    }
    sorted
}

/// Smallest position of any built-in tag in [`TAG_PRIORITY`]; unknown tags rank last.
pub fn tag_rank(note: &Note) -> usize {
    note.tags
        .iter()
        .filter_map(|tag| TAG_PRIORITY.iter().position(|known| known == tag))
        .min()
        .unwrap_or(TAG_PRIORITY.len())
}

// Case-folded order; raw order breaks ties.
fn compare_titles(a: &Note, b: &Note) -> Ordering {
    a.section_title
        .to_lowercase()
        .cmp(&b.section_title.to_lowercase())
        .then_with(|| a.section_title.cmp(&b.section_title))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(notes: &[Note]) -> Vec<&str> {
        notes.iter().map(|n| n.section_id.as_str()).collect()
    }

    #[test]
    fn given_cats_and_dogs_when_sorting_importance_desc_then_dogs_first() {
        let notes = vec![
            Note::new("a", "Cats").with_importance(2).with_tags(["Term"]),
            Note::new("b", "Dogs").with_importance(5).with_tags(["Definition"]),
        ];

        let sorted = sort_notes(&notes, SortCriterion::ImportanceDesc);

        assert_eq!(ids(&sorted), vec!["b", "a"]);
        // input untouched
        assert_eq!(ids(&notes), vec!["a", "b"]);
    }

    #[test]
    fn given_equal_importance_when_sorting_then_keeps_input_order() {
        let notes = vec![
            Note::new("x", "X").with_importance(3),
            Note::new("y", "Y").with_importance(3),
            Note::new("z", "Z").with_importance(3),
        ];

        assert_eq!(ids(&sort_notes(&notes, SortCriterion::ImportanceAsc)), vec!["x", "y", "z"]);
        assert_eq!(ids(&sort_notes(&notes, SortCriterion::ImportanceDesc)), vec!["x", "y", "z"]);
    }

    #[test]
    fn given_mixed_case_titles_when_sorting_alpha_then_ignores_case() {
        let notes = vec![
            Note::new("1", "banana"),
            Note::new("2", "Cherry"),
            Note::new("3", "apple"),
        ];

        assert_eq!(ids(&sort_notes(&notes, SortCriterion::AlphaAsc)), vec!["3", "1", "2"]);
        assert_eq!(ids(&sort_notes(&notes, SortCriterion::AlphaDesc)), vec!["2", "1", "3"]);
    }

    #[test]
    fn given_known_and_unknown_tags_when_sorting_by_tag_then_follows_priority() {
        let notes = vec![
            Note::new("misc", "M").with_importance(5).with_tags(["Misc"]),
            Note::new("proc", "P").with_importance(1).with_tags(["Process"]),
            Note::new("def", "D").with_importance(1).with_tags(["Definition"]),
        ];

        let sorted = sort_notes(&notes, SortCriterion::ByTag);

        assert_eq!(ids(&sorted), vec!["def", "proc", "misc"]);
    }

    #[test]
    fn given_same_tag_rank_when_sorting_by_tag_then_higher_importance_first() {
        let notes = vec![
            Note::new("low", "L").with_importance(1).with_tags(["Example", "Term"]),
            Note::new("high", "H").with_importance(4).with_tags(["Example"]),
        ];

        let sorted = sort_notes(&notes, SortCriterion::ByTag);

        assert_eq!(ids(&sorted), vec!["high", "low"]);
    }

    #[test]
    fn given_multiple_tags_when_ranking_then_uses_best_position() {
        let note = Note::new("n", "N").with_tags(["Location", "Equation"]);

        assert_eq!(tag_rank(&note), 2);
        assert_eq!(tag_rank(&Note::new("e", "E")), TAG_PRIORITY.len());
    }

    #[test]
    fn given_starred_notes_when_sorting_starred_first_then_groups_by_star() {
        let notes = vec![
            Note::new("u5", "U5").with_importance(5),
            Note::new("s1", "S1").with_importance(1).with_starred(true),
            Note::new("u2", "U2").with_importance(2).with_starred(false),
            Note::new("s3", "S3").with_importance(3).with_starred(true),
        ];

        let sorted = sort_notes(&notes, SortCriterion::StarredFirst);

        assert_eq!(ids(&sorted), vec!["s3", "s1", "u5", "u2"]);
    }
}

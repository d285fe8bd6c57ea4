// src/application/tag_filter_panel.rs
use std::collections::HashSet;

/// Overlay listing every tag as a checkbox.
///
/// The selection itself is owned elsewhere; the panel only computes the next
/// full selection for each interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagFilterPanel {
    open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    pub tag: String,
    pub checked: bool,
}

impl TagFilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn entries(&self, tags: &[String], selected: &HashSet<String>) -> Vec<TagEntry> {
        tags.iter()
            .map(|tag| TagEntry {
                tag: tag.clone(),
                checked: selected.contains(tag),
            })
            .collect()
    }

    /// Full selection after flipping `tag`.
    pub fn toggle(&self, tag: &str, selected: &HashSet<String>) -> HashSet<String> {
        let mut next = selected.clone();
        if !next.remove(tag) {
            next.insert(tag.to_string());
        }
        next
    }

    pub fn clear_all(&self) -> HashSet<String> {
        HashSet::new()
    }
}

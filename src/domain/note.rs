// src/domain/note.rs
use crate::constants::MAX_IMPORTANCE;
use serde::{Deserialize, Serialize};

/// One generated content section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub section_id: String,
    pub section_title: String,
    pub content: Vec<String>,
    pub importance: u8,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starred: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_tags: Option<Vec<String>>,
}

impl Note {
    pub fn new(section_id: impl Into<String>, section_title: impl Into<String>) -> Self {
        Self {
            section_id: section_id.into(),
            section_title: section_title.into(),
            content: Vec::new(),
            importance: 1,
            tags: Vec::new(),
            starred: None,
            custom_tags: None,
        }
    }

    pub fn with_content<S: Into<String>>(mut self, lines: impl IntoIterator<Item = S>) -> Self {
        self.content = lines.into_iter().map(Into::into).collect();
        self
    }

    /// Importance above the maximum is clamped.
    pub fn with_importance(mut self, importance: u8) -> Self {
        self.importance = importance.min(MAX_IMPORTANCE);
        self
    }

    pub fn with_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_custom_tags<S: Into<String>>(mut self, tags: impl IntoIterator<Item = S>) -> Self {
        self.custom_tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_starred(mut self, starred: bool) -> Self {
        self.starred = Some(starred);
        self
    }

    pub fn is_starred(&self) -> bool {
        self.starred.unwrap_or(false)
    }

    pub fn custom_tags(&self) -> &[String] {
        self.custom_tags.as_deref().unwrap_or(&[])
    }

    /// Built-in tags followed by custom tags.
    pub fn all_tags(&self) -> impl Iterator<Item = &String> {
        self.tags.iter().chain(self.custom_tags())
    }

    /// Apply the fields present in `patch`, leaving the rest untouched.
    pub fn apply(&mut self, patch: &NotePatch) {
        if let Some(content) = &patch.content {
            self.content = content.clone();
        }
        if let Some(starred) = patch.starred {
            self.starred = Some(starred);
        }
        if let Some(custom_tags) = &patch.custom_tags {
            self.custom_tags = Some(custom_tags.clone());
        }
    }
}

/// Partial update emitted by a note card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub content: Option<Vec<String>>,
    pub starred: Option<bool>,
    pub custom_tags: Option<Vec<String>>,
}

impl NotePatch {
    pub fn content(content: Vec<String>) -> Self {
        Self {
            content: Some(content),
            ..Default::default()
        }
    }

    pub fn starred(starred: bool) -> Self {
        Self {
            starred: Some(starred),
            ..Default::default()
        }
    }

    pub fn custom_tags(custom_tags: Vec<String>) -> Self {
        Self {
            custom_tags: Some(custom_tags),
            ..Default::default()
        }
    }
}

// src/application/note_generator.rs
use crate::constants::MAX_TOPICS;
use crate::domain::{DomainError, Note};
use serde::{Deserialize, Serialize};

/// Source of freshly generated notes.
pub trait NoteGenerator {
    fn generate(&mut self, request: &GenerationRequest) -> Result<Vec<Note>, DomainError>;
}

/// Whether a successful generation replaces the current notes or extends them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMode {
    #[default]
    Replace,
    Append,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub source_name: String,
    pub source_text: String,
    topics: Vec<String>,
}

impl GenerationRequest {
    pub fn new(source_name: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            source_text: source_text.into(),
            topics: Vec::new(),
        }
    }

    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    /// Returns `false` without changing anything when the topic is blank,
    /// already listed, or the list is full.
    pub fn add_topic(&mut self, topic: &str) -> bool {
        let topic = topic.trim();
        if topic.is_empty() || self.topics.len() >= MAX_TOPICS || self.topics.iter().any(|t| t == topic) {
            return false;
        }
        self.topics.push(topic.to_string());
        true
    }

    pub fn remove_topic(&mut self, topic: &str) -> bool {
        let before = self.topics.len();
        self.topics.retain(|t| t != topic);
        self.topics.len() != before
    }

    /// True when no topics are set or the title mentions one of them.
    pub fn wants_title(&self, title: &str) -> bool {
        if self.topics.is_empty() {
            return true;
        }
        let title = title.to_lowercase();
        self.topics
            .iter()
            .any(|topic| title.contains(&topic.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_full_topic_list_when_adding_then_rejects() {
        let mut request = GenerationRequest::new("bio.md", "");
        for topic in ["a", "b", "c", "d", "e"] {
            assert!(request.add_topic(topic));
        }

        assert!(!request.add_topic("f"));
        assert_eq!(request.topics().len(), MAX_TOPICS);
    }

    #[test]
    fn given_blank_or_duplicate_topic_when_adding_then_rejects() {
        let mut request = GenerationRequest::new("bio.md", "");
        assert!(request.add_topic("cells"));

        assert!(!request.add_topic("  "));
        assert!(!request.add_topic(" cells "));
        assert_eq!(request.topics(), ["cells"]);
    }

    #[test]
    fn given_topics_when_checking_title_then_matches_case_insensitively() {
        let mut request = GenerationRequest::new("bio.md", "");
        request.add_topic("Cell");

        assert!(request.wants_title("The cell membrane"));
        assert!(!request.wants_title("Photosynthesis"));
    }

    #[test]
    fn given_no_topics_when_checking_title_then_accepts_everything() {
        assert!(GenerationRequest::new("bio.md", "").wants_title("Anything"));
    }

    #[test]
    fn given_listed_topic_when_removing_then_reports_removal() {
        let mut request = GenerationRequest::new("bio.md", "");
        request.add_topic("cells");

        assert!(request.remove_topic("cells"));
        assert!(!request.remove_topic("cells"));
    }
}
